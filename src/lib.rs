//! Sign-magnitude arbitrary-precision integers over a configurable
//! power-of-two radix.
//!
//! The digit width is a const generic, so every radix is its own type:
//!
//! ```
//! use bigint_core::{BigInt, BigInt8};
//!
//! let a: BigInt = "123456789".parse().unwrap();
//! let b = &a * &a;
//! assert_eq!(b.to_string(), "15241578750190521");
//!
//! let c: BigInt8 = b.into_radix();
//! assert_eq!(c.to_string(), b.to_string());
//! ```

pub mod bigint;
pub mod error;

pub use bigint::{BigInt, BigInt1, BigInt16, BigInt2, BigInt4, BigInt8, BigIntImpl, Digit};
pub use error::Error;
