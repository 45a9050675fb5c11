/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational32::integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational32::new($numer, $denom)
    };
}

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational64::integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational64::new($numer, $denom)
    };
}

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational128::integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational128::new($numer, $denom)
    };
}
