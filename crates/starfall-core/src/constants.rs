//! Simulation constants and tuning parameters.

// --- Playfield ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Margin beyond the field edge at which entities are pruned.
pub const OFF_FIELD_MARGIN: f64 = 20.0;

// --- Stepping ---

/// Nominal step duration at 60 Hz (milliseconds).
///
/// Pixel-per-frame speeds are scaled by `dt_ms / FRAME_MS`, so movement
/// stays consistent when the host delivers steps at a different rate.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

// --- Player ---

/// Player ship size (square, pixels).
pub const PLAYER_SIZE: f64 = 20.0;

/// Player horizontal speed (pixels per nominal frame).
pub const PLAYER_SPEED: f64 = 5.0;

/// Session starting health.
pub const PLAYER_START_HEALTH: i32 = 5;

// --- Weapons ---

/// Primary bullet speed (pixels per nominal frame, upward).
pub const BULLET_SPEED: f64 = 7.0;

/// Primary fire cooldown (ms).
pub const FIRE_INTERVAL_MS: f64 = 150.0;

/// Bullet hitbox width/height.
pub const BULLET_WIDTH: f64 = 3.0;
pub const BULLET_HEIGHT: f64 = 8.0;

/// Default bullet damage.
pub const BULLET_DAMAGE: i32 = 1;

/// Laser-powerup bolt dimensions, speed, and damage.
pub const LASER_BOLT_WIDTH: f64 = 20.0;
pub const LASER_BOLT_HEIGHT: f64 = 40.0;
pub const LASER_BOLT_SPEED: f64 = BULLET_SPEED * 2.0;
pub const LASER_BOLT_DAMAGE: i32 = 3;

/// Horizontal spacing of the weapon-tier bullet fan (px/frame of vx per
/// step away from center).
pub const TIER_FAN_SPACING: f64 = 1.5;

/// Shotgun-powerup spread: 5 bullets at vx = -3, -1.5, 0, 1.5, 3.
pub const SHOTGUN_SPREAD: i32 = 2;

/// Missile fire cooldown (ms).
pub const MISSILE_INTERVAL_MS: f64 = 500.0;

/// Missile homing speed (pixels per nominal frame).
pub const MISSILE_SPEED: f64 = 5.0;

/// Missile launch climb speed before a target is acquired.
pub const MISSILE_LAUNCH_SPEED: f64 = 4.0;

/// Missile damage per hit.
pub const MISSILE_DAMAGE: i32 = 2;

/// Missile proximity fuse: detonates within this distance of an enemy's
/// half-width.
pub const MISSILE_HIT_RADIUS: f64 = 5.0;

// --- Enemies ---

/// Base enemy descent speed (pixels per nominal frame).
pub const ENEMY_SPEED: f64 = 2.0;

/// Regular enemy hitbox size.
pub const ENEMY_SIZE: f64 = 15.0;

/// Guardian (mini-boss) hitbox size.
pub const GUARDIAN_SIZE: f64 = 40.0;

/// Devastator (boss) hitbox size.
pub const DEVASTATOR_SIZE: f64 = 60.0;

/// Regular enemy spawn interval (ms).
pub const ENEMY_SPAWN_INTERVAL_MS: f64 = 1000.0;

/// Guardian spawn interval (ms).
pub const GUARDIAN_SPAWN_INTERVAL_MS: f64 = 45_000.0;

/// Devastator spawn interval (ms).
pub const DEVASTATOR_SPAWN_INTERVAL_MS: f64 = 120_000.0;

// --- Lasers (guardian / devastator edge beams) ---

/// Width of each screen-edge laser band (px).
pub const LASER_ZONE_WIDTH: f64 = 50.0;

/// Vertical half-height of the laser band around the emitter's y.
pub const LASER_BAND_HALF_HEIGHT: f64 = 5.0;

/// Minimum interval between laser damage ticks on the player (ms).
pub const LASER_HIT_COOLDOWN_MS: f64 = 500.0;

/// Guardian laser cycle: window opens every 4 s, stays on 2 s.
pub const GUARDIAN_LASER_INTERVAL_MS: f64 = 4000.0;
pub const GUARDIAN_LASER_DURATION_MS: f64 = 2000.0;

/// Devastator phase-1 laser cycle.
pub const DEVASTATOR_LASER_INTERVAL_MS: f64 = 4000.0;
pub const DEVASTATOR_LASER_DURATION_MS: f64 = 1500.0;

// --- Damage to the player ---

/// Contact damage from ramming an enemy.
pub const CONTACT_DAMAGE: i32 = 1;

/// Enemy bullet damage.
pub const ENEMY_BULLET_DAMAGE: i32 = 1;

/// Enemy bullet hitbox size (square).
pub const ENEMY_BULLET_SIZE: f64 = 6.0;

/// Laser band damage per tick.
pub const LASER_DAMAGE: i32 = 1;

/// Cooldown between contact hits from boss-class enemies (ms).
pub const CONTACT_HIT_COOLDOWN_MS: f64 = 1000.0;

// --- Drops ---

/// Probability that a kill drops a powerup.
pub const POWERUP_DROP_CHANCE: f64 = 0.15;

/// Powerup pickup size and fall speed.
pub const POWERUP_SIZE: f64 = 20.0;
pub const POWERUP_FALL_SPEED: f64 = 2.0;

/// Active powerup duration (ms).
pub const POWERUP_DURATION_MS: f64 = 10_000.0;

/// Currency pickup size and fall speed.
pub const CURRENCY_SIZE: f64 = 12.0;
pub const CURRENCY_FALL_SPEED: f64 = 2.0;

// --- Point defense ---

/// Interception search radius around the player (px).
pub const DEFENSE_RADIUS: f64 = 150.0;

/// Cooldown between interceptor shots (ms).
pub const DEFENSE_COOLDOWN_MS: f64 = 400.0;

/// Interceptor speed (pixels per nominal frame).
pub const DEFENSE_BULLET_SPEED: f64 = 8.0;

/// Center distance at which an interceptor destroys an enemy bullet.
pub const DEFENSE_INTERCEPT_RADIUS: f64 = 8.0;

// --- Shop / economy ---

/// Score at which the first shop opens.
pub const SHOP_SCORE_THRESHOLD: u32 = 500;

/// Threshold increase after each shop visit.
pub const SHOP_THRESHOLD_INCREMENT: u32 = 500;

/// Weapon tier cost: `WEAPON_TIER_COST_SCALE * current_tier`.
pub const WEAPON_TIER_COST_SCALE: u32 = 50;

/// Shield cost: `SHIELD_COST_BASE + SHIELD_COST_SCALE * current_capacity`.
pub const SHIELD_COST_BASE: u32 = 100;
pub const SHIELD_COST_SCALE: u32 = 50;

/// Capacity gained per shield purchase (even increments).
pub const SHIELD_CAPACITY_STEP: i32 = 2;

/// One-time auto-defense cost.
pub const AUTO_DEFENSE_COST: u32 = 500;
