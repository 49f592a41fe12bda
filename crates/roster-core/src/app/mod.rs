//! App: observer groups built on the domain.
//!
//! - **Group**: generic membership engine (join, policy, removal, release)
//! - **Department**: removes on any cause
//! - **Club**: removes on vacation deficit, exempts board members

pub mod club;
pub mod department;
pub mod membership;

pub use self::club::Club;
pub use self::department::Department;
pub use self::membership::Group;
