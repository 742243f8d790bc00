//! Registration and login with MD5 and the process-wide facade

use saltpass::{SaltPass, algorithms, global};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    saltpass_demos::init_logging();

    let passwords = SaltPass::builder()
        .register(algorithms::MD5, algorithms::md5())
        .build()?;
    if global::install(passwords).is_err() {
        return Err("process-wide facade already installed".into());
    }

    saltpass_demos::run(global::get(), algorithms::MD5);

    let salt = global::just_salt_string(0);
    let secret = global::get().encoding().encode(b"secrets");
    println!("{}", global::just_hash_string(algorithms::MD5, &secret, &salt));

    Ok(())
}
