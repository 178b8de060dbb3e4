//! Unit conversion within one physical category.
//!
//! Length, weight, volume and area are ratio scales: every unit carries a
//! factor relative to the category's base unit (metre, kilogram, litre,
//! square metre). Temperature is affine and always pivots through Celsius.
//!
//! ```
//! use civil_calc::{Unit, convert};
//!
//! let pyeong = convert(100.0, Unit::SquareMeter, Unit::Pyeong).unwrap();
//! assert!((pyeong - 30.2499).abs() < 1e-4);
//!
//! assert_eq!(convert(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap(), 212.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::consts::{KELVIN_OFFSET, SQUARE_METERS_PER_PYEONG};
use crate::input::{InputError, parse_number, require_finite};
use crate::prelude::*;

/// Slack for Celsius values computed from Fahrenheit at absolute zero
const ABSOLUTE_ZERO_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("Cannot convert {from} ({}) to {to} ({})", .from.category(), .to.category())]
    CategoryMismatch { from: Unit, to: Unit },

    #[error("{value} {unit} is below absolute zero")]
    BelowAbsoluteZero { value: f64, unit: Unit },

    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Volume,
    Area,
    Temperature,
}

impl Category {
    /// Units of this category in display order, base unit included.
    pub const fn units(self) -> &'static [Unit] {
        use Unit::*;
        match self {
            Self::Length => &[Millimeter, Centimeter, Meter, Kilometer, Inch, Foot, Yard, Mile],
            Self::Weight => &[Milligram, Gram, Kilogram, Tonne, Ounce, Pound, Geun, Don],
            Self::Volume => &[Milliliter, Liter, CubicMeter, Gallon, Quart, Pint, Cup, FluidOunce],
            Self::Area => &[
                SquareCentimeter,
                SquareMeter,
                SquareKilometer,
                Hectare,
                Are,
                Acre,
                SquareFoot,
                Pyeong,
            ],
            Self::Temperature => &[Celsius, Fahrenheit, Kelvin],
        }
    }

    /// Parses `name` and checks that it belongs to this category.
    ///
    /// # Errors
    /// `UnknownUnit` when the name is not recognized or names a unit of another category.
    pub fn unit(self, name: &str) -> Result<Unit, UnitError> {
        let unit: Unit = name.parse()?;
        if unit.category() == self {
            Ok(unit)
        } else {
            Err(UnitError::UnknownUnit(name.trim().to_owned()))
        }
    }
}

/// A unit of measure. US customary volumes are used for gallon, quart, pint,
/// cup and fluid ounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,

    Milligram,
    Gram,
    Kilogram,
    Tonne,
    Ounce,
    Pound,
    /// 근, 600 g
    Geun,
    /// 돈, 3.75 g
    Don,

    Milliliter,
    Liter,
    CubicMeter,
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,

    SquareCentimeter,
    SquareMeter,
    SquareKilometer,
    Hectare,
    Are,
    Acre,
    SquareFoot,
    /// 평
    Pyeong,

    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub const fn category(self) -> Category {
        use Unit::*;
        match self {
            Millimeter | Centimeter | Meter | Kilometer | Inch | Foot | Yard | Mile => Category::Length,
            Milligram | Gram | Kilogram | Tonne | Ounce | Pound | Geun | Don => Category::Weight,
            Milliliter | Liter | CubicMeter | Gallon | Quart | Pint | Cup | FluidOunce => Category::Volume,
            SquareCentimeter | SquareMeter | SquareKilometer | Hectare | Are | Acre | SquareFoot | Pyeong => {
                Category::Area
            }
            Celsius | Fahrenheit | Kelvin => Category::Temperature,
        }
    }

    /// Size in the category's base unit; `None` for temperatures.
    pub const fn factor(self) -> Option<f64> {
        use Unit::*;
        let factor = match self {
            Millimeter => 0.001,
            Centimeter => 0.01,
            Meter => 1.0,
            Kilometer => 1000.0,
            Inch => 0.0254,
            Foot => 0.3048,
            Yard => 0.9144,
            Mile => 1609.344,

            Milligram => 0.000_001,
            Gram => 0.001,
            Kilogram => 1.0,
            Tonne => 1000.0,
            Ounce => 0.028_349_523_125,
            Pound => 0.453_592_37,
            Geun => 0.6,
            Don => 0.003_75,

            Milliliter => 0.001,
            Liter => 1.0,
            CubicMeter => 1000.0,
            Gallon => 3.785_411_784,
            Quart => 0.946_352_946,
            Pint => 0.473_176_473,
            Cup => 0.236_588_236_5,
            FluidOunce => 0.029_573_529_562_5,

            SquareCentimeter => 0.0001,
            SquareMeter => 1.0,
            SquareKilometer => 1_000_000.0,
            Hectare => 10_000.0,
            Are => 100.0,
            Acre => 4_046.856_422_4,
            SquareFoot => 0.092_903_04,
            Pyeong => SQUARE_METERS_PER_PYEONG,

            Celsius | Fahrenheit | Kelvin => return None,
        };
        Some(factor)
    }

    pub const fn symbol(self) -> &'static str {
        use Unit::*;
        match self {
            Millimeter => "mm",
            Centimeter => "cm",
            Meter => "m",
            Kilometer => "km",
            Inch => "in",
            Foot => "ft",
            Yard => "yd",
            Mile => "mi",
            Milligram => "mg",
            Gram => "g",
            Kilogram => "kg",
            Tonne => "t",
            Ounce => "oz",
            Pound => "lb",
            Geun => "geun",
            Don => "don",
            Milliliter => "mL",
            Liter => "L",
            CubicMeter => "m³",
            Gallon => "gal",
            Quart => "qt",
            Pint => "pt",
            Cup => "cup",
            FluidOunce => "fl oz",
            SquareCentimeter => "cm²",
            SquareMeter => "m²",
            SquareKilometer => "km²",
            Hectare => "ha",
            Are => "a",
            Acre => "ac",
            SquareFoot => "ft²",
            Pyeong => "pyeong",
            Celsius => "°C",
            Fahrenheit => "°F",
            Kelvin => "K",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    /// Accepts symbols, English names and the common Korean names,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Unit::*;
        let trimmed = s.trim();
        let unit = match trimmed.to_lowercase().as_str() {
            "mm" | "millimeter" | "millimetre" | "밀리미터" => Millimeter,
            "cm" | "centimeter" | "centimetre" | "센티미터" => Centimeter,
            "m" | "meter" | "metre" | "미터" => Meter,
            "km" | "kilometer" | "kilometre" | "킬로미터" => Kilometer,
            "in" | "inch" | "inches" | "\"" | "인치" => Inch,
            "ft" | "foot" | "feet" | "'" | "피트" => Foot,
            "yd" | "yard" | "yards" | "야드" => Yard,
            "mi" | "mile" | "miles" | "마일" => Mile,

            "mg" | "milligram" | "밀리그램" => Milligram,
            "g" | "gram" | "그램" => Gram,
            "kg" | "kilogram" | "킬로그램" => Kilogram,
            "t" | "ton" | "tonne" | "톤" => Tonne,
            "oz" | "ounce" | "ounces" | "온스" => Ounce,
            "lb" | "lbs" | "pound" | "pounds" | "파운드" => Pound,
            "geun" | "근" => Geun,
            "don" | "돈" => Don,

            "ml" | "milliliter" | "millilitre" | "밀리리터" => Milliliter,
            "l" | "liter" | "litre" | "리터" => Liter,
            "m3" | "m³" | "cubic meter" | "세제곱미터" => CubicMeter,
            "gal" | "gallon" | "gallons" | "갤런" => Gallon,
            "qt" | "quart" | "quarts" | "쿼트" => Quart,
            "pt" | "pint" | "pints" | "파인트" => Pint,
            "cup" | "cups" | "컵" => Cup,
            "fl oz" | "floz" | "fluid ounce" => FluidOunce,

            "cm2" | "cm²" | "제곱센티미터" => SquareCentimeter,
            "m2" | "m²" | "square meter" | "제곱미터" => SquareMeter,
            "km2" | "km²" | "square kilometer" | "제곱킬로미터" => SquareKilometer,
            "ha" | "hectare" | "헥타르" => Hectare,
            "a" | "are" | "아르" => Are,
            "ac" | "acre" | "acres" | "에이커" => Acre,
            "ft2" | "ft²" | "sq ft" | "square foot" | "제곱피트" => SquareFoot,
            "py" | "pyeong" | "평" => Pyeong,

            "c" | "°c" | "℃" | "celsius" | "섭씨" => Celsius,
            "f" | "°f" | "℉" | "fahrenheit" | "화씨" => Fahrenheit,
            "k" | "kelvin" | "켈빈" => Kelvin,

            _ => return Err(UnitError::UnknownUnit(trimmed.to_owned())),
        };
        Ok(unit)
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_owned()
    }
}

fn to_celsius(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Kelvin => value - KELVIN_OFFSET,
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        Unit::Kelvin => celsius + KELVIN_OFFSET,
        _ => celsius,
    }
}

/// Converts `value` from one unit to another of the same category.
///
/// # Errors
/// `CategoryMismatch` across categories, `BelowAbsoluteZero` for impossible
/// temperatures, `Input` for a non-finite value.
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, UnitError> {
    let value = require_finite("value", value)?;
    if from.category() != to.category() {
        return Err(UnitError::CategoryMismatch { from, to });
    }

    match (from.factor(), to.factor()) {
        (Some(from_factor), Some(to_factor)) => Ok(value * from_factor / to_factor),
        _ => {
            let celsius = to_celsius(value, from);
            if celsius < -KELVIN_OFFSET - ABSOLUTE_ZERO_TOLERANCE {
                return Err(UnitError::BelowAbsoluteZero { value, unit: from });
            }
            Ok(from_celsius(celsius, to))
        }
    }
}

/// Parses a typed value and unit names, then converts.
///
/// # Errors
/// `Input` for an unparsable number, `UnknownUnit` for unrecognized names,
/// plus everything [`convert`] reports.
pub fn convert_text(value: &str, from: &str, to: &str) -> Result<f64, UnitError> {
    let value = parse_number("value", value)?;
    convert(value, from.parse()?, to.parse()?)
}

/// `value` in `from` expressed in every unit of its category.
///
/// # Errors
/// As [`convert`].
pub fn convert_all(value: f64, from: Unit) -> Result<Vec<Quantity>, UnitError> {
    from.category()
        .units()
        .iter()
        .map(|&unit| Ok(Quantity::new(convert(value, from, unit)?, unit)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit:  Unit,
}

impl Quantity {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// # Errors
    /// As [`convert`].
    pub fn to(self, unit: Unit) -> Result<Self, UnitError> {
        Ok(Self::new(convert(self.value, self.unit, unit)?, unit))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
