//! Short identifiers for stored records: 8 lowercase hex characters derived
//! from 4 bytes. Uniqueness against existing records is never checked; the
//! collision risk is accepted.

use rand::Rng;

/// Number of random bytes behind each identifier.
pub const ID_BYTES: usize = 4;

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production generator backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let bytes: [u8; ID_BYTES] = rand::thread_rng().gen();
        hex::encode(bytes)
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub use fixtures::SequentialIds;

#[cfg(any(test, feature = "test_utils"))]
mod fixtures {
    use super::IdGenerator;

    /// Deterministic ids: `00000001`, `00000002`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        issued: u32,
    }

    impl SequentialIds {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&mut self) -> String {
            self.issued += 1;
            hex::encode(self.issued.to_be_bytes())
        }
    }
}
