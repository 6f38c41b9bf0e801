//! Macro for declaring cyclic state enums.

/// Generate a cyclic state enum and its `State` implementation.
///
/// Variants follow each other in declaration order and the last one wraps
/// around to the first. A variant may carry a display label with
/// `Variant => "label"`; otherwise the label is the variant name.
///
/// # Example
///
/// ```
/// use signalbox::core::State;
/// use signalbox::cycle_enum;
///
/// cycle_enum! {
///     pub enum Season {
///         Spring => "Spring time",
///         Summer,
///         Autumn,
///         Winter,
///     }
/// }
///
/// assert_eq!(Season::Winter.next(), Season::Spring);
/// assert_eq!(Season::Spring.label(), "Spring time");
/// assert_eq!(Season::Summer.label(), "Summer");
/// assert_eq!(Season::ALL.len(), 4);
/// ```
#[macro_export]
macro_rules! cycle_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in cycle order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::cycle_enum!(@label $variant $($label)?)),+
                }
            }

            fn next(&self) -> Self {
                let position = *self as usize;
                Self::ALL[(position + 1) % Self::ALL.len()]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{cycle_len, State};

    cycle_enum! {
        enum Stroke {
            Intake => "Intake stroke",
            Compression => "Compression stroke",
            Power => "Power stroke",
            Exhaust => "Exhaust stroke",
        }
    }

    #[test]
    fn cycle_enum_follows_declaration_order() {
        assert_eq!(Stroke::Intake.next(), Stroke::Compression);
        assert_eq!(Stroke::Compression.next(), Stroke::Power);
        assert_eq!(Stroke::Power.next(), Stroke::Exhaust);
        assert_eq!(Stroke::Exhaust.next(), Stroke::Intake);
    }

    #[test]
    fn cycle_enum_generates_names_and_labels() {
        assert_eq!(Stroke::Power.name(), "Power");
        assert_eq!(Stroke::Power.label(), "Power stroke");
    }

    #[test]
    fn cycle_enum_closes_over_all_variants() {
        for stroke in Stroke::ALL {
            assert_eq!(cycle_len(stroke, 8), Some(Stroke::ALL.len()));
        }
    }

    #[test]
    fn cycle_enum_single_variant_is_its_own_successor() {
        cycle_enum! {
            enum Solo {
                Only,
            }
        }

        assert_eq!(Solo::Only.next(), Solo::Only);
        assert_eq!(Solo::Only.label(), "Only");
    }

    #[test]
    fn cycle_enum_supports_visibility() {
        cycle_enum! {
            pub enum Flag {
                Up,
                Down,
            }
        }

        assert_eq!(Flag::Up.next(), Flag::Down);
        assert_eq!(Flag::Down.next(), Flag::Up);
    }
}
