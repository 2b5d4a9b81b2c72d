//! Parsing of systems supplied directly on the command line.

use anyhow::{anyhow, bail, Context, Result};

use starroute_lib::Point;

/// Parse a `NAME=X,Y,Z` argument into a [`Point`].
///
/// The name may itself contain `=`; the coordinates follow the last one.
pub fn parse_system(spec: &str) -> Result<Point> {
    let (name, coordinates) = spec
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("expected NAME=X,Y,Z, got '{spec}'"))?;

    let name = name.trim();
    if name.is_empty() {
        bail!("system name is empty in '{spec}'");
    }

    let values = coordinates
        .split(',')
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid coordinate '{}' for system '{name}'", value.trim()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let &[x, y, z] = values.as_slice() else {
        bail!(
            "expected three coordinates for system '{name}', got {}",
            values.len()
        );
    };

    Ok(Point::new(name, x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_coordinates() {
        let point = parse_system("Alpha Centauri=3.03125, -0.09375, 3.15625").expect("valid");
        assert_eq!(point, Point::new("Alpha Centauri", 3.03125, -0.09375, 3.15625));
    }

    #[test]
    fn name_may_contain_equals_sign() {
        let point = parse_system("A=B=1,2,3").expect("valid");
        assert_eq!(point.name, "A=B");
    }

    #[test]
    fn rejects_wrong_coordinate_count() {
        let err = parse_system("Sol=0,0").expect_err("two coordinates");
        assert!(err.to_string().contains("expected three coordinates"));
    }

    #[test]
    fn rejects_missing_separator_and_bad_numbers() {
        assert!(parse_system("Sol").is_err());
        assert!(parse_system("=1,2,3").is_err());
        let err = parse_system("Sol=0,zero,0").expect_err("bad number");
        assert!(err.to_string().contains("invalid coordinate 'zero'"));
    }
}
