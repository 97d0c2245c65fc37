//! Monitor snapshots

use crate::backend::NativeBackend;
use crate::foundation::Vector2;

/// Properties of one connected monitor at the time of the query
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorInfo {
    /// Index passed to the native monitor queries
    pub index: i32,
    /// Human-readable name
    pub name: String,
    /// Width of the current video mode in pixels
    pub width: i32,
    /// Height of the current video mode in pixels
    pub height: i32,
    /// Physical width in millimetres
    pub physical_width: i32,
    /// Physical height in millimetres
    pub physical_height: i32,
    /// Position of the monitor on the virtual desktop
    pub position: Vector2,
    /// Refresh rate in Hz
    pub refresh_rate: i32,
}

impl MonitorInfo {
    pub(crate) fn query(backend: &dyn NativeBackend, index: i32) -> Self {
        Self {
            index,
            name: backend.monitor_name(index),
            width: backend.monitor_width(index),
            height: backend.monitor_height(index),
            physical_width: backend.monitor_physical_width(index),
            physical_height: backend.monitor_physical_height(index),
            position: backend.monitor_position(index),
            refresh_rate: backend.monitor_refresh_rate(index),
        }
    }

    /// Pixels per millimetre along the horizontal axis
    pub fn horizontal_density(&self) -> Option<f32> {
        (self.physical_width > 0).then(|| self.width as f32 / self.physical_width as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recording::FakeMonitor;
    use crate::backend::RecordingBackend;

    #[test]
    fn test_query_reads_every_field() {
        let backend = RecordingBackend::new();
        backend.live_mut().monitors = vec![
            FakeMonitor::default(),
            FakeMonitor {
                name: "Side".to_string(),
                width: 1920,
                height: 1080,
                physical_width: 480,
                physical_height: 270,
                position: Vector2::new(2560.0, 0.0),
                refresh_rate: 144,
            },
        ];

        let info = MonitorInfo::query(&backend, 1);
        assert_eq!(info.name, "Side");
        assert_eq!((info.width, info.height), (1920, 1080));
        assert_eq!(info.refresh_rate, 144);
        assert_eq!(info.position, Vector2::new(2560.0, 0.0));
        assert_eq!(info.horizontal_density(), Some(4.0));
    }
}
