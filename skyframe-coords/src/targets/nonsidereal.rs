use crate::errors::{CoordError, CoordResult};
use chrono::{DateTime, Utc};
use skyframe_core::{Dms, Hms, ParamKind, Quantity, TargetResult};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference to an object in an external ephemeris service.
///
/// Both parts are required; the meaning of the type ordinal is defined by
/// the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizonsLink {
    pub object_id: i64,
    pub object_type_ordinal: i32,
}

impl HorizonsLink {
    pub fn new(object_id: i64, object_type_ordinal: i32) -> Self {
        Self {
            object_id,
            object_type_ordinal,
        }
    }

    /// Builds a link from optional parts, which must be both present or
    /// both absent.
    pub fn from_parts(object_id: Option<i64>, object_type_ordinal: Option<i32>) -> CoordResult<Option<Self>> {
        match (object_id, object_type_ordinal) {
            (Some(id), Some(ordinal)) => Ok(Some(Self::new(id, ordinal))),
            (None, None) => Ok(None),
            (Some(id), None) => Err(CoordError::incomplete_horizons_link(format!(
                "object id {} has no type ordinal",
                id
            ))),
            (None, Some(ordinal)) => Err(CoordError::incomplete_horizons_link(format!(
                "type ordinal {} has no object id",
                ordinal
            ))),
        }
    }
}

/// State shared by targets whose position comes from an ephemeris rather
/// than a catalog: the last computed RA/Dec, the instant it is valid for
/// and an optional ephemeris link.
///
/// Equality and hashing ignore RA and Dec, since those are derived values
/// that change with `valid_at`. Use [`identity_eq`](Self::identity_eq) to
/// include them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NonSiderealData {
    ra: Hms,
    dec: Dms,
    epoch: Quantity,
    valid_at: Option<DateTime<Utc>>,
    horizons: Option<HorizonsLink>,
}

impl NonSiderealData {
    pub fn new() -> Self {
        Self {
            ra: Hms::new(),
            dec: Dms::new(),
            epoch: Quantity::zero(ParamKind::Epoch),
            valid_at: None,
            horizons: None,
        }
    }

    pub fn ra(&self) -> &Hms {
        &self.ra
    }

    pub fn ra_mut(&mut self) -> &mut Hms {
        &mut self.ra
    }

    pub fn dec(&self) -> &Dms {
        &self.dec
    }

    pub fn dec_mut(&mut self) -> &mut Dms {
        &mut self.dec
    }

    /// Parses RA and Dec from text. Neither changes unless both parse.
    pub fn set_axes_from_text(&mut self, ra: &str, dec: &str) -> TargetResult<()> {
        let mut new_ra = self.ra.clone();
        let mut new_dec = self.dec.clone();
        new_ra.set_from_text(ra)?;
        new_dec.set_from_text(dec)?;
        self.ra = new_ra;
        self.dec = new_dec;
        Ok(())
    }

    pub fn epoch(&self) -> Quantity {
        self.epoch
    }

    pub fn set_epoch(&mut self, epoch: Quantity) -> TargetResult<()> {
        self.epoch = super::retag(ParamKind::Epoch, epoch)?;
        Ok(())
    }

    /// The instant the stored RA/Dec were computed for.
    pub fn valid_at(&self) -> Option<DateTime<Utc>> {
        self.valid_at
    }

    pub fn set_valid_at(&mut self, when: Option<DateTime<Utc>>) {
        self.valid_at = when;
    }

    pub fn horizons(&self) -> Option<HorizonsLink> {
        self.horizons
    }

    pub fn set_horizons(&mut self, link: Option<HorizonsLink>) {
        self.horizons = link;
    }

    /// Equality that also compares RA and Dec.
    pub fn identity_eq(&self, other: &Self) -> bool {
        self == other && self.ra == other.ra && self.dec == other.dec
    }
}

impl Default for NonSiderealData {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for NonSiderealData {
    fn eq(&self, other: &Self) -> bool {
        self.epoch == other.epoch && self.valid_at == other.valid_at && self.horizons == other.horizons
    }
}

impl Eq for NonSiderealData {}

impl Hash for NonSiderealData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch.hash(state);
        self.valid_at.hash(state);
        self.horizons.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use skyframe_core::Units;

    #[test]
    fn test_horizons_from_parts() {
        assert_eq!(HorizonsLink::from_parts(None, None).unwrap(), None);
        assert_eq!(
            HorizonsLink::from_parts(Some(1003517), Some(2)).unwrap(),
            Some(HorizonsLink::new(1003517, 2))
        );
        assert!(matches!(
            HorizonsLink::from_parts(Some(5), None),
            Err(CoordError::IncompleteHorizonsLink { .. })
        ));
        assert!(HorizonsLink::from_parts(None, Some(1)).is_err());
    }

    #[test]
    fn test_equality_ignores_ra_dec() {
        let a = NonSiderealData::new();
        let mut b = a.clone();
        b.ra_mut().set_as(10.0, Units::Degrees).unwrap();
        assert_eq!(a, b);
        assert!(!a.identity_eq(&b));
        assert!(a.identity_eq(&a.clone()));
    }

    #[test]
    fn test_equality_sees_valid_at() {
        let a = NonSiderealData::new();
        let mut b = a.clone();
        b.set_valid_at(Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_epoch_rejects_other_roles() {
        let mut d = NonSiderealData::new();
        let parallax = Quantity::new(ParamKind::Parallax, 1.0, Units::Arcsecs).unwrap();
        assert!(d.set_epoch(parallax).is_err());
        assert_eq!(d.epoch().value(), 2000.0);
        let jd = Quantity::new(ParamKind::Epoch, 2460000.5, Units::Jd).unwrap();
        d.set_epoch(jd).unwrap();
        assert_eq!(d.epoch().units(), Units::Jd);
    }
}
