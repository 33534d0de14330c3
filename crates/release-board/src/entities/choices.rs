//! Fixed enumerations shared by task validation and field provisioning.
//!
//! Each enumeration's `ALL` list is the only place its labels are spelled
//! out: deserialization, `Display`, and the single-select options created on
//! the board all read from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a label does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
    expected: String,
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in board option order.
            pub const ALL: &'static [Self] = &[$( Self::$variant, )+];

            /// The label used in task documents and as the board option name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// All labels, in board option order.
            pub fn labels() -> Vec<String> {
                Self::ALL.iter().map(|v| v.as_str().to_string()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseChoiceError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::labels().join(", "),
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseChoiceError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

choice_enum! {
    /// Which kinds of release a task applies to. Used only for local filtering;
    /// it never becomes a board field.
    ReleaseType as "release type" {
        Album => "Album",
        Ep => "EP",
        Single => "Single",
        Video => "Video",
        /// The task applies to every release type.
        All => "All",
    }
}

choice_enum! {
    /// Board field: work category.
    Category as "category" {
        Production => "Production",
        Marketing => "Marketing",
        Relationships => "Relationships",
        Revenue => "Revenue",
        Content => "Content",
        Infrastructure => "Infrastructure",
    }
}

choice_enum! {
    /// Board field: urgency.
    Priority as "priority" {
        Critical => "Critical",
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

choice_enum! {
    /// Board field: where in the release timeline the task sits.
    Phase as "phase" {
        Foundation => "Phase 0: Foundation",
        PreProduction => "Phase 1: Pre-Production",
        Production => "Phase 2: Production",
        VisualAssets => "Phase 3: Visual Assets",
        DistributionSetup => "Phase 4: Distribution Setup",
        ProfileSetup => "Phase 5: Profile Setup",
        ContentCreation => "Phase 6: Content Creation",
        PreReleaseCampaign => "Phase 7: Pre-Release Campaign",
        ReleaseWeek => "Phase 8: Release Week",
        PostReleaseEarly => "Phase 9: Post-Release 1-4 Weeks",
        PostReleaseLate => "Phase 10: Post-Release 5-8 Weeks",
        OngoingMaintenance => "Ongoing Maintenance",
    }
}
