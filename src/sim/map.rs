//! Static map geometry and the two built-in layouts
//!
//! A map is a bounded rectangle `[0,width]x[0,height]` holding axis-aligned
//! obstacles. Only solid obstacles block movement and bullets; lamps and pipes
//! hang overhead and are skipped by every collision query.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pickup::PickupKind;
use crate::consts::{ENEMY_RADIUS, PICKUP_RADIUS, PLAYER_RADIUS};
use crate::error::ConfigError;

/// Obstacle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Building,
    Wall,
    Warehouse,
    Container,
    Crate,
    /// Overhead street or flood lamp (decorative)
    Lamp,
    /// Overhead pipe run (decorative)
    Pipe,
}

impl ObstacleKind {
    /// Whether this category takes part in collision tests
    pub fn is_solid(&self) -> bool {
        !matches!(self, ObstacleKind::Lamp | ObstacleKind::Pipe)
    }
}

/// An axis-aligned rectangular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: ObstacleKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    /// Solid obstacles with zero area can never be hit reliably
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Closest point of the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.width),
            p.y.clamp(self.y, self.y + self.height),
        )
    }

    /// Circle-vs-rectangle overlap using the closest-point distance
    #[inline]
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        center.distance_squared(self.closest_point(center)) < radius * radius
    }
}

/// Read-only collision queries against static geometry
pub trait MapProvider {
    /// True if a circle at `pos` leaves the world or overlaps a solid obstacle
    fn check_collision(&self, pos: Vec2, radius: f32) -> bool;

    /// World extents (width, height)
    fn size(&self) -> Vec2;
}

/// World bounds plus obstacle list (immutable once built)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub obstacles: Vec<Obstacle>,
}

impl World {
    pub fn new(width: f32, height: f32, obstacles: Vec<Obstacle>) -> Self {
        Self {
            width,
            height,
            obstacles,
        }
    }

    /// True if the circle crosses the world edge
    #[inline]
    pub fn out_of_bounds(&self, pos: Vec2, radius: f32) -> bool {
        pos.x - radius < 0.0
            || pos.y - radius < 0.0
            || pos.x + radius > self.width
            || pos.y + radius > self.height
    }

    /// Obstacles that take part in collision tests
    pub fn solid_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| o.kind.is_solid() && !o.is_degenerate())
    }
}

impl MapProvider for World {
    fn check_collision(&self, pos: Vec2, radius: f32) -> bool {
        // NaN positions compare false everywhere, so treat them as blocked
        if !pos.is_finite() || self.out_of_bounds(pos, radius) {
            return true;
        }
        self.solid_obstacles().any(|o| o.overlaps_circle(pos, radius))
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Built-in layout selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapKind {
    #[default]
    StreetGrid,
    IndustrialYard,
}

impl MapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::StreetGrid => "Street Grid",
            MapKind::IndustrialYard => "Industrial Yard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "street" | "streets" | "street-grid" | "street_grid" => Some(MapKind::StreetGrid),
            "industrial" | "yard" | "industrial-yard" | "industrial_yard" => {
                Some(MapKind::IndustrialYard)
            }
            _ => None,
        }
    }

    /// Build the layout for this selection
    pub fn layout(&self) -> MapLayout {
        match self {
            MapKind::StreetGrid => MapLayout::street_grid(),
            MapKind::IndustrialYard => MapLayout::industrial_yard(),
        }
    }
}

/// A pickup placed by the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupSpawn {
    pub pos: Vec2,
    pub kind: PickupKind,
}

/// Geometry plus spawn tables for one map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayout {
    pub name: String,
    pub world: World,
    pub player_spawn: Vec2,
    pub enemy_spawns: Vec<Vec2>,
    #[serde(default)]
    pub pickup_spawns: Vec<PickupSpawn>,
}

impl MapLayout {
    pub fn world_size(&self) -> Vec2 {
        self.world.size()
    }

    /// Parse a custom layout from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let layout: MapLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject layouts the simulation cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let map = || self.name.clone();
        let world = &self.world;

        if !(world.width > 0.0 && world.height > 0.0) {
            return Err(ConfigError::EmptyWorld {
                map: map(),
                width: world.width,
                height: world.height,
            });
        }
        if self.enemy_spawns.is_empty() {
            return Err(ConfigError::NoEnemySpawns { map: map() });
        }
        if let Some(index) = world
            .obstacles
            .iter()
            .position(|o| o.kind.is_solid() && o.is_degenerate())
        {
            return Err(ConfigError::DegenerateObstacle { map: map(), index });
        }

        let blocked = |what: &'static str, pos: Vec2| ConfigError::BlockedSpawn {
            map: map(),
            what,
            x: pos.x,
            y: pos.y,
        };
        if world.check_collision(self.player_spawn, PLAYER_RADIUS) {
            return Err(blocked("player", self.player_spawn));
        }
        if let Some(&pos) = self
            .enemy_spawns
            .iter()
            .find(|&&p| world.check_collision(p, ENEMY_RADIUS))
        {
            return Err(blocked("enemy", pos));
        }
        if let Some(spawn) = self
            .pickup_spawns
            .iter()
            .find(|s| world.check_collision(s.pos, PICKUP_RADIUS))
        {
            return Err(blocked("pickup", spawn.pos));
        }
        Ok(())
    }

    /// Downtown blocks separated by a regular street grid
    pub fn street_grid() -> Self {
        const SIZE: f32 = 2400.0;
        const FIRST_BLOCK: f32 = 200.0;
        const BLOCK: f32 = 300.0;
        const STREET: f32 = 200.0;
        const BLOCKS: usize = 4;

        let mut obstacles = Vec::with_capacity(BLOCKS * BLOCKS * 2);
        for row in 0..BLOCKS {
            for col in 0..BLOCKS {
                let x = FIRST_BLOCK + col as f32 * (BLOCK + STREET);
                let y = FIRST_BLOCK + row as f32 * (BLOCK + STREET);
                obstacles.push(Obstacle::new(x, y, BLOCK, BLOCK, ObstacleKind::Building));
                // Street lamp on the block's bottom-right corner
                obstacles.push(Obstacle::new(
                    x + BLOCK + 10.0,
                    y + BLOCK + 10.0,
                    12.0,
                    12.0,
                    ObstacleKind::Lamp,
                ));
            }
        }
        // Low walls closing off the outer edge of the grid
        obstacles.push(Obstacle::new(2150.0, 400.0, 20.0, 300.0, ObstacleKind::Wall));
        obstacles.push(Obstacle::new(400.0, 2150.0, 300.0, 20.0, ObstacleKind::Wall));

        Self {
            name: MapKind::StreetGrid.as_str().to_string(),
            world: World::new(SIZE, SIZE, obstacles),
            player_spawn: Vec2::new(100.0, 100.0),
            enemy_spawns: vec![
                Vec2::new(600.0, 1100.0),
                Vec2::new(1100.0, 600.0),
                Vec2::new(1600.0, 1350.0),
                Vec2::new(2250.0, 2250.0),
                Vec2::new(1100.0, 2250.0),
            ],
            pickup_spawns: vec![
                PickupSpawn {
                    pos: Vec2::new(600.0, 300.0),
                    kind: PickupKind::Money,
                },
                PickupSpawn {
                    pos: Vec2::new(1100.0, 1350.0),
                    kind: PickupKind::Ammo,
                },
                PickupSpawn {
                    pos: Vec2::new(1600.0, 850.0),
                    kind: PickupKind::Health,
                },
                PickupSpawn {
                    pos: Vec2::new(2250.0, 600.0),
                    kind: PickupKind::Money,
                },
                PickupSpawn {
                    pos: Vec2::new(350.0, 2250.0),
                    kind: PickupKind::Ammo,
                },
            ],
        }
    }

    /// Warehouses and container stacks under overhead pipework
    pub fn industrial_yard() -> Self {
        use ObstacleKind::*;

        let obstacles = vec![
            Obstacle::new(300.0, 300.0, 600.0, 400.0, Warehouse),
            Obstacle::new(1300.0, 200.0, 500.0, 300.0, Warehouse),
            Obstacle::new(2200.0, 300.0, 500.0, 500.0, Warehouse),
            Obstacle::new(400.0, 1200.0, 500.0, 500.0, Warehouse),
            Obstacle::new(1400.0, 1000.0, 400.0, 600.0, Warehouse),
            Obstacle::new(2200.0, 1300.0, 500.0, 400.0, Warehouse),
            Obstacle::new(1000.0, 800.0, 120.0, 40.0, Container),
            Obstacle::new(1900.0, 900.0, 40.0, 120.0, Container),
            Obstacle::new(1000.0, 1700.0, 200.0, 50.0, Container),
            Obstacle::new(1150.0, 600.0, 30.0, 30.0, Crate),
            Obstacle::new(2000.0, 1750.0, 30.0, 30.0, Crate),
            Obstacle::new(0.0, 950.0, 3000.0, 10.0, Pipe),
            Obstacle::new(1250.0, 0.0, 10.0, 2000.0, Pipe),
            Obstacle::new(950.0, 950.0, 16.0, 16.0, Lamp),
            Obstacle::new(2050.0, 1150.0, 16.0, 16.0, Lamp),
        ];

        Self {
            name: MapKind::IndustrialYard.as_str().to_string(),
            world: World::new(3000.0, 2000.0, obstacles),
            player_spawn: Vec2::new(150.0, 1000.0),
            enemy_spawns: vec![
                Vec2::new(1100.0, 400.0),
                Vec2::new(2000.0, 1100.0),
                Vec2::new(2850.0, 1000.0),
                Vec2::new(1200.0, 1850.0),
                Vec2::new(2900.0, 150.0),
            ],
            pickup_spawns: vec![
                PickupSpawn {
                    pos: Vec2::new(1100.0, 300.0),
                    kind: PickupKind::Money,
                },
                PickupSpawn {
                    pos: Vec2::new(1250.0, 1300.0),
                    kind: PickupKind::Ammo,
                },
                PickupSpawn {
                    pos: Vec2::new(2000.0, 600.0),
                    kind: PickupKind::Health,
                },
                PickupSpawn {
                    pos: Vec2::new(2800.0, 1850.0),
                    kind: PickupKind::Money,
                },
                PickupSpawn {
                    pos: Vec2::new(700.0, 1000.0),
                    kind: PickupKind::Ammo,
                },
            ],
        }
    }
}
