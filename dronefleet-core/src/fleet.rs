//! Fleet limits shared by allocation and reporting.

/// Maximum total order weight a carrier may take, in kilograms.
pub const DEFAULT_CAPACITY_KG: f64 = 10.0;
/// Maximum distance from the origin of any destination a carrier serves.
pub const DEFAULT_MAX_RANGE: f64 = 100.0;
/// Number of carriers in the fleet.
pub const DEFAULT_FLEET_SIZE: usize = 3;
/// Cruise speed in distance units per minute.
pub const DEFAULT_SPEED_UNITS_PER_MINUTE: f64 = 0.333;

/// Limits of the delivery fleet.
///
/// The defaults are part of the observable contract: consumers compare
/// numeric output against a fleet of three 10 kg carriers with a range of
/// 100 units travelling at 0.333 units per minute.
///
/// # Examples
/// ```
/// use dronefleet_core::FleetConfig;
///
/// let fleet = FleetConfig::default();
/// assert_eq!(fleet.fleet_size, 3);
/// assert!(fleet.admits(10.0, 100.0));
/// assert!(!fleet.admits(10.5, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetConfig {
    /// Carrier capacity in kilograms.
    pub capacity_kg: f64,
    /// Maximum destination distance from the origin.
    pub max_range: f64,
    /// Number of carriers available.
    pub fleet_size: usize,
    /// Speed used to turn route distance into minutes.
    pub speed_units_per_minute: f64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            capacity_kg: DEFAULT_CAPACITY_KG,
            max_range: DEFAULT_MAX_RANGE,
            fleet_size: DEFAULT_FLEET_SIZE,
            speed_units_per_minute: DEFAULT_SPEED_UNITS_PER_MINUTE,
        }
    }
}

impl FleetConfig {
    /// Whether a single carrier could take a load of `weight_kg` to a
    /// destination `distance` away from the origin.
    #[must_use]
    pub fn admits(&self, weight_kg: f64, distance: f64) -> bool {
        weight_kg <= self.capacity_kg && distance <= self.max_range
    }

    /// Whether `distance` lies within the carrier range.
    #[must_use]
    pub fn in_range(&self, distance: f64) -> bool {
        distance <= self.max_range
    }
}
