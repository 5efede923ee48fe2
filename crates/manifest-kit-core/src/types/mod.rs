mod address;
mod blob;
mod bytes;
mod expression;
mod non_fungible;
mod transient;

pub mod decimal;

pub use address::{Address, AddressError};
pub use blob::{Blob, BlobHashError};
pub use bytes::Bytes;
pub use decimal::{Decimal, DecimalError, FixedDecimal, PreciseDecimal, RoundingMode};
pub use expression::Expression;
pub use non_fungible::{LocalIdError, LocalIdKind, NonFungibleGlobalId, NonFungibleLocalId};
pub use transient::{Bucket, Proof, TransientIdentifier};
