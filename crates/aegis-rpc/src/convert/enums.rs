//! Integer wire codes for domain enumerations.
//!
//! Code `0` is `UNSPECIFIED` for every enum, and unknown codes decode to
//! the `Unspecified` variant rather than failing.

use aegis_core::models::{
    membership::MembershipStatus, organization::OrganizationStatus, profile::Gender,
    role::RoleStatus, user::UserStatus,
};

/// A domain enum with a fixed integer wire encoding.
pub trait WireEnum: Copy + Sized {
    fn to_code(self) -> i32;
    fn from_code(code: i32) -> Self;
}

macro_rules! wire_enum {
    ($ty:ident { $($variant:ident = $code:literal),+ $(,)? }) => {
        impl WireEnum for $ty {
            fn to_code(self) -> i32 {
                match self {
                    $ty::Unspecified => 0,
                    $($ty::$variant => $code,)+
                }
            }

            fn from_code(code: i32) -> Self {
                match code {
                    $($code => $ty::$variant,)+
                    _ => $ty::Unspecified,
                }
            }
        }
    };
}

wire_enum!(RoleStatus { Active = 1, Disabled = 2 });
wire_enum!(MembershipStatus { Active = 1, Suspended = 2, Expired = 3 });
wire_enum!(UserStatus { Active = 1, Inactive = 2, Locked = 3 });
wire_enum!(OrganizationStatus { Active = 1, Archived = 2 });
wire_enum!(Gender { Male = 1, Female = 2, Other = 3 });

/// Bidirectional mapping between domain enums and their wire codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumConverter;

impl EnumConverter {
    pub fn new() -> Self {
        Self
    }

    /// Enum fields are always present on the wire, `UNSPECIFIED` included.
    pub fn to_wire<E: WireEnum>(&self, value: E) -> Option<i32> {
        Some(value.to_code())
    }

    /// An absent code decodes like `UNSPECIFIED`.
    pub fn from_wire<E: WireEnum>(&self, code: Option<i32>) -> E {
        E::from_code(code.unwrap_or(0))
    }
}
