//! Obstacle generation and the scrolling obstacle field

use rand::Rng;

use crate::tuning::Tuning;

/// A pair of walls with a vertical gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge, decreases every frame
    pub x: f32,
    width: f32,
    top: f32,
    bottom: f32,
    passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, width: f32, top: f32, gap_height: f32) -> Self {
        Self {
            id,
            x,
            width,
            top,
            bottom: top + gap_height,
            passed: false,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Upper boundary of the gap
    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Lower boundary of the gap
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Mark passed if the right edge is now behind `body_x`.
    /// Returns true only on the frame the flag flips.
    pub fn check_passed(&mut self, body_x: f32) -> bool {
        if !self.passed && self.right() < body_x {
            self.passed = true;
            return true;
        }
        false
    }
}

/// What happened to the field during one update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdate {
    /// Id of the obstacle spawned this frame
    pub spawned: Option<u32>,
    /// Ids that crossed behind the body this frame, in field order
    pub passed: Vec<u32>,
    /// Number of obstacles purged off the left edge
    pub purged: usize,
}

/// Obstacles in spawn order, which is also left-to-right screen order
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Drop every obstacle and restart ids
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.next_id = 1;
    }

    /// Append a new obstacle at the right edge with a random gap
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let top = rng.random_range(tuning.gap_top_min..tuning.gap_top_max);
        self.obstacles.push(Obstacle::new(
            id,
            tuning.play_width,
            tuning.obstacle_width,
            top,
            tuning.gap_height,
        ));
        log::debug!("Spawned obstacle {} (gap {:.1}..{:.1})", id, top, top + tuning.gap_height);
        id
    }

    /// One frame: spawn on cadence, scroll left, record passes, purge off-screen
    pub fn update<R: Rng>(
        &mut self,
        frame: u64,
        body_x: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> FieldUpdate {
        let mut update = FieldUpdate::default();

        if frame % tuning.spawn_period == 0 {
            update.spawned = Some(self.spawn(rng, tuning));
        }

        for obstacle in &mut self.obstacles {
            obstacle.x -= tuning.obstacle_speed;
            if obstacle.check_passed(body_x) {
                update.passed.push(obstacle.id);
            }
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right() > 0.0);
        update.purged = before - self.obstacles.len();
        if update.purged > 0 {
            log::debug!("Purged {} obstacle(s)", update.purged);
        }

        update
    }
}
