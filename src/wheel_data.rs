///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{im::Vector, lens, Data, Lens};
use rand::Rng;

use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::sector::{default_sectors, palette_color, Sector};

pub const MIN_SECTORS: usize = 2;
pub const FULL_TURN: f64 = 360.0;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Landing resolution
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Maps a cumulative clockwise rotation to the index of the sector under the top pointer.
///
/// An empty wheel has no sectors to land on and maps to index 0.
pub fn landing_index(rotation: f64, sector_count: usize) -> usize {
    if sector_count == 0 {
        return 0;
    }
    let count = sector_count as f64;
    let sector_size = FULL_TURN / count;
    let final_position = rotation % FULL_TURN;
    let raw_index = (count - (final_position / sector_size) % count - 1.0).floor() as i64;

    // raw_index is negative just before a sector boundary
    let count = sector_count as i64;
    (((raw_index % count) + count) % count) as usize
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinPlan
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Describes one accepted spin: where the wheel starts, where it stops and what it lands on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    pub from: f64,
    pub to: f64,
    pub landing_index: usize,
}

impl SpinPlan {
    pub fn increment(&self) -> f64 {
        self.to - self.from
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// WheelData
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Sector list and spin state of one wheel.
///
/// Fields are only mutated through the methods below so that the sector floor, unique ids and the
/// ever-growing rotation hold. Widgets bind to it through [`WheelData::sectors_lens`].
#[derive(Clone, Data, PartialEq, Debug)]
pub struct WheelData {
    sectors: Vector<Sector>,
    /// Degrees, clockwise. Grows with every spin and is never reset.
    cumulative_rotation: f64,
    spinning: bool,
    last_result: Option<Sector>,
    pending_result: Option<Sector>,
}

impl Default for WheelData {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelData {
    pub fn new() -> Self {
        Self::from_checked_sectors(default_sectors())
    }

    pub fn with_sectors(sectors: Vector<Sector>) -> Result<Self, WheelError> {
        if sectors.len() < MIN_SECTORS {
            return Err(WheelError::SectorFloor { min: MIN_SECTORS });
        }
        for (index, sector) in sectors.iter().enumerate() {
            if sectors.iter().skip(index + 1).any(|other| other.id == sector.id) {
                return Err(WheelError::DuplicateSector(sector.id));
            }
        }
        Ok(Self::from_checked_sectors(sectors))
    }

    fn from_checked_sectors(sectors: Vector<Sector>) -> Self {
        Self {
            sectors,
            cumulative_rotation: 0.0,
            spinning: false,
            last_result: None,
            pending_result: None,
        }
    }

    /// Read-only view of the sectors for list widgets. Writes through it are dropped.
    pub fn sectors_lens() -> impl Lens<WheelData, Vector<Sector>> {
        lens::Map::new(
            |data: &WheelData| data.sectors.clone(),
            |_: &mut WheelData, _: Vector<Sector>| {},
        )
    }

    pub fn sectors(&self) -> &Vector<Sector> {
        &self.sectors
    }

    pub fn cumulative_rotation(&self) -> f64 {
        self.cumulative_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn last_result(&self) -> Option<&Sector> {
        self.last_result.as_ref()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn sector_size(&self) -> f64 {
        FULL_TURN / self.sectors.len() as f64
    }

    // Sector editing
    /// Id for the next sector: `count + 1`, bumped past the largest id still on the wheel.
    fn next_sector_id(&self) -> usize {
        let max_id = self.sectors.iter().map(|sector| sector.id).max().unwrap_or(0);
        (self.sectors.len() + 1).max(max_id + 1)
    }

    pub fn add_sector(&mut self, label: &str) -> Result<&Sector, WheelError> {
        let text = label.trim();
        if text.is_empty() {
            return Err(WheelError::EmptyLabel);
        }

        let count = self.sectors.len();
        let id = self.next_sector_id();
        self.sectors.push_back(Sector::new(id, text, palette_color(count)));
        Ok(&self.sectors[count])
    }

    pub fn remove_sector(&mut self, id: usize) -> Result<Sector, WheelError> {
        if self.sectors.len() <= MIN_SECTORS {
            return Err(WheelError::SectorFloor { min: MIN_SECTORS });
        }

        let index = self
            .sectors
            .iter()
            .position(|sector| sector.id == id)
            .ok_or(WheelError::UnknownSector(id))?;
        Ok(self.sectors.remove(index))
    }

    // Spinning
    /// Draws the stopping point from `rng` and hands it to [`WheelData::spin_by`], which rejects
    /// the spin if one is already running.
    pub fn spin<R: Rng>(&mut self, rng: &mut R, config: &WheelConfig) -> Result<SpinPlan, WheelError> {
        let full_rotations = rng.gen_range(config.full_rotations());
        let extra_degrees = rng.gen_range(0..360);
        self.spin_by(full_rotations, extra_degrees)
    }

    /// Starts a spin with a known stopping point.
    ///
    /// The landing sector is decided here, against the sectors as they are now, and committed by
    /// [`WheelData::complete_spin`] once the animation is over.
    pub fn spin_by(&mut self, full_rotations: u32, extra_degrees: u32) -> Result<SpinPlan, WheelError> {
        if self.spinning {
            return Err(WheelError::AlreadySpinning);
        }

        let from = self.cumulative_rotation;
        let to = from + full_rotations as f64 * FULL_TURN + extra_degrees as f64;
        let index = landing_index(to, self.sectors.len());
        let landing = self
            .sectors
            .get(index)
            .cloned()
            .ok_or(WheelError::SectorFloor { min: MIN_SECTORS })?;

        self.cumulative_rotation = to;
        self.spinning = true;
        self.pending_result = Some(landing);

        Ok(SpinPlan {
            from,
            to,
            landing_index: index,
        })
    }

    pub fn complete_spin(&mut self) -> Result<Sector, WheelError> {
        if !self.spinning {
            return Err(WheelError::NotSpinning);
        }
        self.spinning = false;
        let result = self.pending_result.take().ok_or(WheelError::NotSpinning)?;
        self.last_result = Some(result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sector::SECTOR_PALETTE;

    fn two_sector_wheel() -> WheelData {
        let mut sectors = Vector::new();
        sectors.push_back(Sector::new(1, "Yes", SECTOR_PALETTE[0]));
        sectors.push_back(Sector::new(2, "No", SECTOR_PALETTE[1]));
        WheelData::with_sectors(sectors).unwrap()
    }

    #[test]
    fn landing_index_stays_in_range() {
        for count in MIN_SECTORS..=24 {
            for tenth in 0..(360 * 10 * 3) {
                let rotation = tenth as f64 / 10.0;
                let index = landing_index(rotation, count);
                assert!(index < count, "rotation {rotation} count {count} -> {index}");
            }
        }
    }

    #[test]
    fn landing_on_whole_turns_picks_last_sector() {
        assert_eq!(landing_index(1800.0, 6), 5);
        assert_eq!(landing_index(0.0, 6), 5);
        assert_eq!(landing_index(3600.0, 4), 3);
    }

    #[test]
    fn landing_walks_backwards_through_sectors() {
        // 6 sectors, 60 degrees each
        assert_eq!(landing_index(30.0, 6), 4);
        assert_eq!(landing_index(60.0, 6), 4);
        assert_eq!(landing_index(61.0, 6), 3);
        assert_eq!(landing_index(300.0, 6), 0);
        assert_eq!(landing_index(359.0, 6), 5);
        assert_eq!(landing_index(1800.0 + 150.0, 6), 2);
    }

    #[test]
    fn spin_example_lands_on_last_sector() {
        let mut wheel = WheelData::new();
        let plan = wheel.spin_by(5, 0).unwrap();
        assert_eq!(plan.from, 0.0);
        assert_eq!(plan.to, 1800.0);
        assert_eq!(plan.landing_index, 5);
        assert!(wheel.is_spinning());
        assert_eq!(wheel.last_result(), None);

        let result = wheel.complete_spin().unwrap();
        assert_eq!(result.id, 6);
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.last_result(), Some(&result));
    }

    #[test]
    fn empty_label_is_ignored() {
        let mut wheel = WheelData::new();
        let before = wheel.clone();
        assert_eq!(wheel.add_sector(""), Err(WheelError::EmptyLabel));
        assert_eq!(wheel.add_sector("   \t"), Err(WheelError::EmptyLabel));
        assert_eq!(wheel, before);
    }

    #[test]
    fn added_sector_gets_next_id_and_cyclic_color() {
        let mut wheel = WheelData::new();
        let sector = wheel.add_sector("  Bonus ").unwrap().clone();
        assert_eq!(wheel.sector_count(), 7);
        assert_eq!(sector.id, 7);
        assert_eq!(sector.text, "Bonus");
        assert_eq!(sector.color, SECTOR_PALETTE[6]);

        wheel.add_sector("a").unwrap();
        let wrapped = wheel.add_sector("b").unwrap();
        assert_eq!(wrapped.color, SECTOR_PALETTE[0]);
    }

    #[test]
    fn removal_keeps_order() {
        let mut wheel = WheelData::new();
        let removed = wheel.remove_sector(3).unwrap();
        assert_eq!(removed.id, 3);
        let ids: Vec<usize> = wheel.sectors.iter().map(|sector| sector.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn removal_below_floor_is_ignored() {
        let mut wheel = two_sector_wheel();
        assert_eq!(wheel.remove_sector(1), Err(WheelError::SectorFloor { min: MIN_SECTORS }));
        assert_eq!(wheel.sector_count(), 2);
    }

    #[test]
    fn removing_unknown_id_is_ignored() {
        let mut wheel = WheelData::new();
        assert_eq!(wheel.remove_sector(42), Err(WheelError::UnknownSector(42)));
        assert_eq!(wheel.sector_count(), 6);
    }

    #[test]
    fn second_spin_while_spinning_is_ignored() {
        let mut wheel = WheelData::new();
        let mut rng = StdRng::seed_from_u64(7);
        let config = WheelConfig::default();

        let plan = wheel.spin(&mut rng, &config).unwrap();
        let rotation = wheel.cumulative_rotation();
        assert_eq!(wheel.spin(&mut rng, &config), Err(WheelError::AlreadySpinning));
        assert_eq!(wheel.spin_by(5, 0), Err(WheelError::AlreadySpinning));
        assert_eq!(wheel.cumulative_rotation(), rotation);
        assert_eq!(plan.to, rotation);

        wheel.complete_spin().unwrap();
        assert_eq!(wheel.complete_spin(), Err(WheelError::NotSpinning));
    }

    #[test]
    fn random_spins_stay_within_bounds() {
        let mut wheel = WheelData::new();
        let mut rng = StdRng::seed_from_u64(42);
        let config = WheelConfig::default();

        for _ in 0..200 {
            let plan = wheel.spin(&mut rng, &config).unwrap();
            let increment = plan.increment();
            assert!(increment >= 5.0 * FULL_TURN, "{increment}");
            assert!(increment < 10.0 * FULL_TURN, "{increment}");
            assert_eq!(increment.fract(), 0.0);
            wheel.complete_spin().unwrap();
        }
    }

    #[test]
    fn cumulative_rotation_is_sum_of_increments() {
        let mut wheel = WheelData::new();
        let mut rng = StdRng::seed_from_u64(3);
        let config = WheelConfig::default();

        let mut total = 0.0;
        let mut previous = 0.0;
        for _ in 0..50 {
            let plan = wheel.spin(&mut rng, &config).unwrap();
            total += plan.increment();
            assert!(wheel.cumulative_rotation() >= previous);
            previous = wheel.cumulative_rotation();
            let result = wheel.complete_spin().unwrap();
            assert_eq!(result, wheel.sectors[plan.landing_index]);
        }
        assert_eq!(wheel.cumulative_rotation(), total);
    }

    #[test]
    fn result_is_fixed_when_the_spin_starts() {
        let mut wheel = WheelData::new();
        let plan = wheel.spin_by(5, 0).unwrap();
        let expected = wheel.sectors[plan.landing_index].clone();

        wheel.remove_sector(expected.id).unwrap();
        wheel.add_sector("Late entry").unwrap();

        assert_eq!(wheel.complete_spin(), Ok(expected));
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut wheel = WheelData::new();
        wheel.remove_sector(3).unwrap();
        let bonus = wheel.add_sector("Bonus").unwrap().clone();
        assert_eq!(bonus.id, 7);

        let ids: Vec<usize> = wheel.sectors().iter().map(|sector| sector.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6, 7]);

        let removed = wheel.remove_sector(bonus.id).unwrap();
        assert_eq!(removed.text, "Bonus");
        let texts: Vec<&str> = wheel.sectors().iter().map(|sector| sector.text.as_str()).collect();
        assert_eq!(texts, vec!["Prize 1", "Prize 2", "Prize 4", "Prize 5", "Prize 6"]);
    }

    #[test]
    fn removing_the_last_sector_frees_its_id() {
        let mut wheel = WheelData::new();
        wheel.remove_sector(6).unwrap();
        assert_eq!(wheel.add_sector("Again").unwrap().id, 6);
    }

    #[test]
    fn undersized_wheels_are_rejected() {
        assert_eq!(
            WheelData::with_sectors(Vector::new()),
            Err(WheelError::SectorFloor { min: MIN_SECTORS })
        );
        let mut one = Vector::new();
        one.push_back(Sector::new(1, "Only", SECTOR_PALETTE[0]));
        assert_eq!(WheelData::with_sectors(one), Err(WheelError::SectorFloor { min: MIN_SECTORS }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut sectors = Vector::new();
        sectors.push_back(Sector::new(1, "A", SECTOR_PALETTE[0]));
        sectors.push_back(Sector::new(2, "B", SECTOR_PALETTE[1]));
        sectors.push_back(Sector::new(1, "C", SECTOR_PALETTE[2]));
        assert_eq!(WheelData::with_sectors(sectors), Err(WheelError::DuplicateSector(1)));
    }

    #[test]
    fn landing_on_an_empty_wheel_does_not_panic() {
        assert_eq!(landing_index(1800.0, 0), 0);
        assert_eq!(landing_index(123.0, 0), 0);
    }
}
