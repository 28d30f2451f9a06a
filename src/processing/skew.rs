use crate::models::{TextItem, Vertex};
use log::{debug, warn};

/// Estimates the document rotation in degrees as the mean slope angle of every
/// box's top edge and bottom edge.
///
/// Returns `None` for an empty document or when any edge is vertical; callers
/// treat that as no rotation.
pub fn estimate_angle(items: &[TextItem]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }

    let mut angles = Vec::with_capacity(items.len() * 2);
    for item in items {
        let [v0, v1, v2, v3] = item.vertices;
        match (edge_angle(v0, v1), edge_angle(v2, v3)) {
            (Some(top), Some(bottom)) => {
                angles.push(top);
                angles.push(bottom);
            }
            _ => {
                warn!(
                    "Vertical edge in text box '{}' {:?}, document angle unknown",
                    item.text, item.vertices
                );
                return None;
            }
        }
    }

    let angle = angles.iter().sum::<f64>() / angles.len() as f64;
    debug!("Estimated document angle {:.3} degrees from {} boxes", angle, items.len());
    Some(angle)
}

fn edge_angle(from: Vertex, to: Vertex) -> Option<f64> {
    let dx = to.x as f64 - from.x as f64;
    let dy = to.y as f64 - from.y as f64;
    if dx == 0.0 {
        return None;
    }
    Some((dy / dx).atan().to_degrees())
}
