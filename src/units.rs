//! Typographic unit conversion.
//!
//! PDF geometry is specified in points, but page sizes and margins are
//! authored in whatever unit the caller prefers. [`Unit`] holds a single
//! physical length and exposes it in points, pica, inch, and millimeter,
//! using exact decimal arithmetic so repeated conversions never accumulate
//! binary floating-point drift.
//!
//! Conversion ratios: 72 points = 6 pica = 1 inch = 25.4 mm.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};

/// A measurement unit supported by the conversion engine.
///
/// Ordinal values are stable and may be persisted; new kinds must be
/// appended, never inserted. Decode persisted ordinals with
/// [`UnitKind::try_from`]:
///
/// ```
/// use pdf_smith::units::UnitKind;
///
/// assert_eq!(UnitKind::try_from(2).unwrap(), UnitKind::Inch);
/// assert!(UnitKind::try_from(99).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum UnitKind {
    /// Typographic point, 1/72 inch
    Point = 0,
    /// Pica, 12 points
    Pica = 1,
    /// Inch
    Inch = 2,
    /// Millimeter
    Millimeter = 3,
}

impl UnitKind {
    /// Stable ordinal value of this kind.
    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for UnitKind {
    type Error = Error;

    fn try_from(ordinal: i32) -> Result<Self> {
        match ordinal {
            0 => Ok(UnitKind::Point),
            1 => Ok(UnitKind::Pica),
            2 => Ok(UnitKind::Inch),
            3 => Ok(UnitKind::Millimeter),
            _ => Err(Error::InvalidUnitKind(ordinal)),
        }
    }
}

/// A physical length readable in any supported unit.
///
/// The length is stored canonically in points; the other representations
/// are derived on read, so all four stay consistent by construction and
/// every mutation is atomic. Accessors are O(1) and side-effect free.
///
/// # Examples
///
/// ```
/// use pdf_smith::units::{Unit, UnitKind};
/// use rust_decimal::Decimal;
///
/// let mut size = Unit::new();
/// size.set_value(Decimal::from(72), UnitKind::Point);
/// assert_eq!(size.value(UnitKind::Pica), Decimal::from(6));
/// assert_eq!(size.value(UnitKind::Inch), Decimal::from(1));
/// assert_eq!(size.value(UnitKind::Millimeter), Decimal::new(254, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unit {
    point: Decimal,
}

impl Unit {
    /// Create a unit in the zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length from a scalar expressed in the given unit.
    ///
    /// All representations are updated together; there is no partial
    /// update path.
    pub fn set_value(&mut self, value: Decimal, kind: UnitKind) {
        match kind {
            UnitKind::Point => self.set_point(value),
            UnitKind::Pica => self.set_pica(value),
            UnitKind::Inch => self.set_inch(value),
            UnitKind::Millimeter => self.set_millimeter(value),
        }
    }

    /// Get the length in the given unit, rounded to 3 decimal places.
    ///
    /// Rounding is half-away-from-zero. Use the full-precision accessors
    /// ([`Unit::point`] and friends) when chaining conversions.
    pub fn value(&self, kind: UnitKind) -> Decimal {
        let exact = match kind {
            UnitKind::Point => self.point(),
            UnitKind::Pica => self.pica(),
            UnitKind::Inch => self.inch(),
            UnitKind::Millimeter => self.millimeter(),
        };
        exact.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Length in points, full precision.
    pub fn point(&self) -> Decimal {
        self.point
    }

    /// Length in pica, full precision.
    pub fn pica(&self) -> Decimal {
        self.point / Decimal::from(12)
    }

    /// Length in inches, full precision.
    pub fn inch(&self) -> Decimal {
        self.point / Decimal::from(72)
    }

    /// Length in millimeters, full precision.
    pub fn millimeter(&self) -> Decimal {
        self.inch() * Decimal::new(254, 1)
    }

    /// Set the length in points.
    pub fn set_point(&mut self, point: Decimal) {
        self.point = point;
    }

    /// Set the length in pica.
    pub fn set_pica(&mut self, pica: Decimal) {
        self.point = pica * Decimal::from(12);
    }

    /// Set the length in inches.
    pub fn set_inch(&mut self, inch: Decimal) {
        self.point = inch * Decimal::from(72);
    }

    /// Set the length in millimeters.
    pub fn set_millimeter(&mut self, millimeter: Decimal) {
        self.point = millimeter / Decimal::new(254, 1) * Decimal::from(72);
    }
}
