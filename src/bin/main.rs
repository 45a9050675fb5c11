use std::process::exit;

use clap::{Parser, ValueEnum};
use log::error;

use brocot::{closest_bracket, closest_rational, Extended, Rational64};

/// Approximate a number by a fraction with a bounded denominator.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Number to approximate
    #[arg(allow_negative_numbers = true)]
    value: f64,
    /// Largest denominator allowed
    #[arg(short = 'd', long, default_value_t = 1000)]
    max_denominator: i64,
    /// Print the fractions directly below and above instead of the closest one
    #[arg(short, long)]
    bracket: bool,
    /// How to print fractions
    #[arg(short, long, value_enum, default_value_t = Format::Fraction)]
    format: Format,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// `n/d`
    Fraction,
    /// A whole part followed by a proper fraction, `w n/d`
    Mixed,
    /// The float value of the fraction
    Decimal,
}

impl Format {
    fn render(self, value: &Rational64) -> String {
        match self {
            Format::Fraction => value.to_string(),
            Format::Mixed => value.standardize().format_with(|n, d| {
                // Infinite, undefined, or a denominator of `i64::MIN` that standardizing can't flip
                if d <= 0 {
                    return format!("{}/{}", n, d);
                }
                match (n.checked_div(d), n.checked_rem(d)) {
                    (Some(whole), Some(0)) => whole.to_string(),
                    (Some(0), Some(remainder)) => format!("{}/{}", remainder, d),
                    (Some(whole), Some(remainder)) => format!("{} {}/{}", whole, remainder.abs(), d),
                    _ => format!("{}/{}", n, d),
                }
            }),
            Format::Decimal => match value.to_float() {
                Extended::Ok(float) => float.to_string(),
                Extended::PositiveInfinity => "inf".to_string(),
                Extended::NegativeInfinity => "-inf".to_string(),
                Extended::Undefined => "undefined".to_string(),
            },
        }
    }
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let output = if opts.bracket {
        closest_bracket(opts.value, opts.max_denominator).map(|bracket| {
            format!("{} {}", opts.format.render(&bracket.lower()), opts.format.render(&bracket.upper()))
        })
    } else {
        closest_rational(opts.value, opts.max_denominator).map(|closest| opts.format.render(&closest))
    };

    match output {
        Ok(output) => println!("{}", output),
        Err(error) => {
            error!("search failed: {:?}", error);
            eprintln!("{}", error);
            exit(1);
        },
    }
}

#[cfg(test)]
mod test {
    use brocot::R64;

    use crate::Format;

    #[test]
    fn render() {
        assert_eq!(Format::Fraction.render(&R64!(-22, 7)), "-22/7");
        assert_eq!(Format::Mixed.render(&R64!(22, 7)), "3 1/7");
        assert_eq!(Format::Mixed.render(&R64!(-22, 7)), "-3 1/7");
        assert_eq!(Format::Mixed.render(&R64!(-1, 7)), "-1/7");
        assert_eq!(Format::Mixed.render(&R64!(6, -3)), "-2");
        assert_eq!(Format::Mixed.render(&R64!(1, 0)), "1/0");
        assert_eq!(Format::Mixed.render(&R64!(0, 0)), "0/0");
    }

    #[test]
    fn render_mixed_extremes() {
        assert_eq!(Format::Mixed.render(&R64!(i64::MIN, 1)), i64::MIN.to_string());
        assert_eq!(Format::Mixed.render(&R64!(i64::MIN, -1)), i64::MIN.to_string());
        assert_eq!(Format::Mixed.render(&R64!(1, i64::MIN)), format!("-1/{}", i64::MIN));
        assert_eq!(Format::Mixed.render(&R64!(i64::MIN, i64::MAX)), format!("-1 1/{}", i64::MAX));
        assert_eq!(Format::Decimal.render(&R64!(1, 4)), "0.25");
        assert_eq!(Format::Decimal.render(&R64!(-1, 0)), "-inf");
    }
}
