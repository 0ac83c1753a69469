//! Positional argument inference for [`Translator::translate`].
//!
//! Call sites may pass up to three trailing arguments in flexible order:
//! a quantity, a placeholder map and a context map. Both maps share a type,
//! so their role is inferred from position:
//!
//! 1. If the first slot is a map, it holds placeholders and a map in the
//!    second slot is the context.
//! 2. Else if the first slot is a quantity, a map in the second slot holds
//!    placeholders and a map in the third slot is the context.
//! 3. Otherwise, if the second slot is a quantity, a map in the third slot
//!    holds placeholders. If not, a map in the second slot holds placeholders
//!    and a map in the third slot is the context.
//!
//! [`Translator::translate`]: crate::Translator::translate

use std::collections::BTreeMap;

use crate::types::{Context, Placeholders};

/// A single positional argument to [`Translator::translate`](crate::Translator::translate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// A quantity used for plural selection and `%n` substitution.
    Quantity(i64),
    /// A placeholder or context map, depending on position.
    Map(&'a BTreeMap<String, String>),
    /// An empty slot.
    Nil,
}

impl<'a> Arg<'a> {
    fn as_map(self) -> Option<&'a BTreeMap<String, String>> {
        match self {
            Arg::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<i64> for Arg<'_> {
    fn from(n: i64) -> Self {
        Arg::Quantity(n)
    }
}

impl From<i32> for Arg<'_> {
    fn from(n: i32) -> Self {
        Arg::Quantity(i64::from(n))
    }
}

impl From<u32> for Arg<'_> {
    fn from(n: u32) -> Self {
        Arg::Quantity(i64::from(n))
    }
}

/// Counts above `i64::MAX` saturate to `i64::MAX`.
impl From<usize> for Arg<'_> {
    fn from(n: usize) -> Self {
        Arg::Quantity(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl<'a> From<&'a BTreeMap<String, String>> for Arg<'a> {
    fn from(map: &'a BTreeMap<String, String>) -> Self {
        Arg::Map(map)
    }
}

impl From<()> for Arg<'_> {
    fn from((): ()) -> Self {
        Arg::Nil
    }
}

impl<'a, T: Into<Arg<'a>>> From<Option<T>> for Arg<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Nil, Into::into)
    }
}

/// Arguments after positional inference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedArgs<'a> {
    pub quantity: Option<i64>,
    pub placeholders: Option<&'a Placeholders>,
    /// `None` means the global context applies.
    pub context: Option<&'a Context>,
}

impl<'a> ResolvedArgs<'a> {
    /// Infer argument roles from up to three slots. Extra slots are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use phrasing::{Arg, ResolvedArgs, context, placeholders};
    ///
    /// let names = placeholders! { "name" => "Jane" };
    /// let female = context! { "gender" => "female" };
    ///
    /// let args = ResolvedArgs::from_slots(&[Arg::from(&names), Arg::from(&female)]);
    /// assert_eq!(args.quantity, None);
    /// assert_eq!(args.placeholders, Some(&names));
    /// assert_eq!(args.context, Some(&female));
    ///
    /// let args = ResolvedArgs::from_slots(&[Arg::Nil, Arg::from(4), Arg::from(&names)]);
    /// assert_eq!(args.quantity, Some(4));
    /// assert_eq!(args.placeholders, Some(&names));
    /// assert_eq!(args.context, None);
    /// ```
    pub fn from_slots(slots: &[Arg<'a>]) -> Self {
        let slot = |index: usize| slots.get(index).copied().unwrap_or(Arg::Nil);
        let (first, second, third) = (slot(0), slot(1), slot(2));

        match first {
            Arg::Map(placeholders) => Self {
                quantity: None,
                placeholders: Some(placeholders),
                context: second.as_map(),
            },
            Arg::Quantity(n) => Self {
                quantity: Some(n),
                placeholders: second.as_map(),
                context: third.as_map(),
            },
            Arg::Nil => match second {
                Arg::Quantity(n) => Self {
                    quantity: Some(n),
                    placeholders: third.as_map(),
                    context: None,
                },
                Arg::Map(_) | Arg::Nil => Self {
                    quantity: None,
                    placeholders: second.as_map(),
                    context: third.as_map(),
                },
            },
        }
    }
}
