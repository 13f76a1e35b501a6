// Tunables for recording and playback

/// Default snapshot memory budget for a recorded demo (64 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// Capacity of the fixed-size containers used by the demos
pub const DEMO_CAPACITY: usize = 4;

/// Number of disks in the Tower of Hanoi demo
pub const HANOI_DISKS: u32 = 3;

/// Delay between automatic steps in play mode
pub const AUTOPLAY_INTERVAL_MS: u64 = 1000;
