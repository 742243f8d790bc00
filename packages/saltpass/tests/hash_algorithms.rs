//! Hash primitive adapters and the built-in digest families

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hex_literal::hex;
use saltpass::{
    Digester, Factory, IncrementalHash, PasswordHasher, SaltPassError, algorithms,
    compute_digest,
};

/// Primitive whose digest is simply everything written since the last reset
#[derive(Default)]
struct RecordingHash {
    buf: Vec<u8>,
    broken: bool,
}

impl RecordingHash {
    fn broken() -> Self {
        Self {
            buf: Vec::new(),
            broken: true,
        }
    }
}

impl IncrementalHash for RecordingHash {
    fn reset(&mut self) {
        self.buf.clear();
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        if self.broken {
            return Err(io::Error::other("now it's broken"));
        }
        self.buf.extend_from_slice(data);
        Ok(())
    }

    fn sum(&mut self) -> Vec<u8> {
        self.buf.clone()
    }
}

#[test]
fn test_recording_hash() {
    // meta: the fake behaves like a primitive
    let mut h = RecordingHash::default();
    h.write(b"abc").unwrap();
    assert_eq!(h.sum(), b"abc");

    let mut h = RecordingHash::broken();
    assert!(h.write(b"def").is_err());
    assert!(h.write(b"def").is_err());
}

#[test]
fn test_compute_digest_writes_password_then_salt() {
    let mut h = RecordingHash::default();
    h.write(b"stale").unwrap();
    let digest = compute_digest(&mut h, b"abc", b"def").unwrap();
    assert_eq!(digest, b"abcdef");
}

#[test]
fn test_compute_digest_write_failure() {
    let mut h = RecordingHash::broken();
    let err = compute_digest(&mut h, b"abc", b"def").unwrap_err();
    assert!(matches!(err, SaltPassError::Hashing(_)));
}

#[test]
fn test_compute_digest_through_boxed_primitive() {
    let mut boxed: Box<dyn IncrementalHash> = Box::new(RecordingHash::default());
    assert_eq!(compute_digest(&mut boxed, b"abc", b"def").unwrap(), b"abcdef");

    let mut boxed: Box<dyn IncrementalHash> = Box::new(RecordingHash::broken());
    assert!(matches!(
        compute_digest(&mut boxed, b"abc", b"def"),
        Err(SaltPassError::Hashing(_))
    ));
}

#[test]
fn test_digester_resets_between_calls() {
    let digester = Digester::new(RecordingHash::default());
    let first = digester.hash(b"abc", b"def").unwrap();
    let second = digester.hash(b"abc", b"def").unwrap();
    assert_eq!(first, b"abcdef");
    assert_eq!(first, second);

    let other = digester.hash(b"x", b"y").unwrap();
    assert_eq!(other, b"xy");
}

#[test]
fn test_digester_write_failure() {
    let digester = Digester::new(RecordingHash::broken());
    assert!(matches!(
        digester.hash(b"abc", b"def"),
        Err(SaltPassError::Hashing(_))
    ));
}

#[test]
fn test_factory_builds_fresh_primitive_per_call() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&built);
    let factory = Factory::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        RecordingHash::default()
    });

    assert_eq!(factory.hash(b"abc", b"def").unwrap(), b"abcdef");
    assert_eq!(factory.hash(b"abc", b"def").unwrap(), b"abcdef");
    assert_eq!(built.load(Ordering::SeqCst), 2);
}

#[test]
fn test_factory_write_failure() {
    let factory = Factory::new(RecordingHash::broken);
    assert!(matches!(
        factory.hash(b"abc", b"def"),
        Err(SaltPassError::Hashing(_))
    ));
}

#[test]
fn test_empty_factory() {
    let factory = Factory::empty();
    assert!(!factory.has_constructor());
    assert!(matches!(
        factory.hash(b"abc", b"def"),
        Err(SaltPassError::NoConstructor)
    ));
}

#[test]
fn test_closure_is_a_hasher() {
    let concat = |p: &[u8], s: &[u8]| -> saltpass::Result<Vec<u8>> { Ok([p, s].concat()) };
    assert_eq!(concat.hash(b"abc", b"def").unwrap(), b"abcdef");
}

#[test]
fn test_factory_is_shareable_across_threads() {
    let factory = Arc::new(algorithms::sha256());
    let expected = factory.hash(b"password", b"salt").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let factory = Arc::clone(&factory);
            std::thread::spawn(move || factory.hash(b"password", b"salt").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_md5_vector() {
    let digest = algorithms::md5().hash(b"password", b"salt").unwrap();
    assert_eq!(digest, hex!("b305cadbb3bce54f3aa59c64fec00dea"));
}

#[test]
fn test_sha1_vector() {
    let digest = algorithms::sha1().hash(b"password", b"salt").unwrap();
    assert_eq!(digest, hex!("c88e9c67041a74e0357befdff93f87dde0904214"));
}

#[test]
fn test_sha256_vector() {
    let digest = algorithms::sha256().hash(b"password", b"salt").unwrap();
    assert_eq!(
        digest,
        hex!("7a37b85c8918eac19a9089c0fa5a2ab4dce3f90528dcdeec108b23ddf3607b99")
    );
}

#[test]
fn test_sha512_vector() {
    let digest = algorithms::sha512().hash(b"abc", b"def").unwrap();
    assert_eq!(
        digest,
        hex!(
            "e32ef19623e8ed9d267f657a81944b3d07adbb768518068e88435745564e8d41"
            "50a0a703be2a7d88b61e3d390c2bb97e2d4c311fdc69d6b1267f05f59aa920e7"
        )
    );
}

#[test]
fn test_sha3_256_vector() {
    let digest = algorithms::sha3_256().hash(b"password", b"salt").unwrap();
    assert_eq!(
        digest,
        hex!("6ddeb8cc56954bc4d3f7f8b650d2de39db3e29bb863cc8ea96161924bac67a55")
    );
}

#[test]
fn test_digest_lengths() {
    let expected = [
        (algorithms::MD5, 16),
        (algorithms::SHA1, 20),
        (algorithms::SHA224, 28),
        (algorithms::SHA256, 32),
        (algorithms::SHA384, 48),
        (algorithms::SHA512, 64),
        (algorithms::SHA3_256, 32),
        (algorithms::SHA3_512, 64),
    ];
    for (name, len) in expected {
        let factory = algorithms::builtin(name).unwrap();
        assert_eq!(factory.hash(b"pw", b"salt").unwrap().len(), len, "{name}");
    }
}

#[test]
fn test_builtin_unknown_name() {
    assert!(algorithms::builtin("whirlpool").is_none());
    assert_eq!(algorithms::builtin_names().len(), 8);
}
