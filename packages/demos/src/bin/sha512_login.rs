//! Registration and login with SHA-512 and an explicit facade

use saltpass::SaltPass;
use saltpass::algorithms::SHA512;

fn main() {
    saltpass_demos::init_logging();

    let passwords = SaltPass::default();
    saltpass_demos::run(&passwords, SHA512);
}
