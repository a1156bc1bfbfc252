mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;
pub(crate) mod util;

pub use cbc::{cbc_decrypt, cbc_encrypt};
pub use cfb::{cfb_decrypt, cfb_encrypt};
pub use ctr::ctr_apply;
pub use ecb::{ecb_decrypt, ecb_encrypt};
pub use ofb::ofb_apply;
pub use util::{PARALLEL_THRESHOLD, increment_counter, pad, unpad};

/// Block cipher modes of operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
}

impl Mode {
    /// CBC, CFB and OFB take a 16-byte IV.
    pub const fn needs_iv(self) -> bool {
        matches!(self, Mode::Cbc | Mode::Cfb | Mode::Ofb)
    }

    /// CTR takes an 8-byte nonce.
    pub const fn needs_nonce(self) -> bool {
        matches!(self, Mode::Ctr)
    }
}
