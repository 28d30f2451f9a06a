use super::splitter::split_index;
use crate::models::TextItem;
use log::debug;

/// A run of co-linear fragments in reading order
#[derive(Debug, Clone)]
pub struct TextLine<'a> {
    /// Top-left y of the item that seeded the line
    pub seed_y: i32,
    pub items: Vec<&'a TextItem>,
    /// Fragments before this index are the label, the rest the value
    pub split: usize,
}

impl<'a> TextLine<'a> {
    pub fn tokens(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    pub fn label_tokens(&self) -> Vec<&'a str> {
        self.items[..self.split]
            .iter()
            .map(|item| item.text.as_str())
            .collect()
    }

    pub fn value_tokens(&self) -> Vec<&'a str> {
        self.items[self.split..]
            .iter()
            .map(|item| item.text.as_str())
            .collect()
    }

    pub fn is_unlabeled(&self) -> bool {
        self.split == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupedLines<'a> {
    /// Lines in seed order, top of the card first
    pub lines: Vec<TextLine<'a>>,
    /// Indices into `lines` of lines without a label region
    pub unlabeled: Vec<usize>,
}

impl<'a> GroupedLines<'a> {
    pub fn unlabeled_lines(&self) -> impl Iterator<Item = &TextLine<'a>> + '_ {
        self.unlabeled.iter().map(move |idx| &self.lines[*idx])
    }
}

/// Partitions text items into lines using the estimated document angle
pub struct LineGrouper {
    slope: f64,
}

impl LineGrouper {
    /// `None` (unknown angle) groups as if the card were level
    pub fn new(angle: Option<f64>) -> Self {
        let slope = angle.unwrap_or(0.0).to_radians().tan();
        LineGrouper { slope }
    }

    /// Whether `other` lies on the line through `seed`.
    ///
    /// The seed's left-edge midpoint is carried along the document slope to
    /// `other`'s left x and must fall strictly within half of `other`'s
    /// left-edge height of its midpoint. The test is directional.
    pub fn is_colinear(&self, seed: &TextItem, other: &TextItem) -> bool {
        let projected_y =
            seed.left_mid_y() + self.slope * (other.left_x() as f64 - seed.left_x() as f64);
        let half_height = other.left_height() / 2.0;
        let mid_y = other.left_mid_y();

        projected_y > mid_y - half_height && projected_y < mid_y + half_height
    }

    pub fn group<'a>(&self, items: &'a [TextItem]) -> GroupedLines<'a> {
        // Seeds go top to bottom, left to right, so the result does not depend
        // on detector output order
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by_key(|&idx| {
            let corner = items[idx].top_left();
            (corner.y, corner.x)
        });

        let mut claimed = vec![false; items.len()];
        let mut grouped = GroupedLines::default();

        for &seed in &order {
            if claimed[seed] {
                continue;
            }
            claimed[seed] = true;

            let mut members = vec![seed];
            for &candidate in &order {
                if !claimed[candidate] && self.is_colinear(&items[seed], &items[candidate]) {
                    claimed[candidate] = true;
                    members.push(candidate);
                }
            }
            members.sort_by_key(|&idx| items[idx].left_x());

            let line_items: Vec<&TextItem> = members.iter().map(|&idx| &items[idx]).collect();
            let split = split_index(&line_items);
            let line = TextLine {
                seed_y: items[seed].top_left().y,
                items: line_items,
                split,
            };
            debug!(
                "Line at y={} split={} tokens={:?}",
                line.seed_y,
                line.split,
                line.tokens()
            );

            if line.is_unlabeled() {
                grouped.unlabeled.push(grouped.lines.len());
            }
            grouped.lines.push(line);
        }

        debug!(
            "Grouped {} items into {} lines ({} without label)",
            items.len(),
            grouped.lines.len(),
            grouped.unlabeled.len()
        );
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vertex;

    #[test]
    fn test_equal_midpoints_are_colinear() {
        let grouper = LineGrouper::new(Some(0.0));
        let a = TextItem::from_rect("Nama", 20, 100, 50, 20);
        let b = TextItem::from_rect("BUDI", 300, 100, 50, 20);
        assert!(grouper.is_colinear(&a, &b));
        assert!(grouper.is_colinear(&b, &a));
    }

    #[test]
    fn test_offset_beyond_half_height_is_not_colinear() {
        let grouper = LineGrouper::new(Some(0.0));
        let a = TextItem::from_rect("Nama", 20, 100, 50, 20);
        assert!(!grouper.is_colinear(&a, &TextItem::from_rect("x", 300, 111, 50, 20)));
        assert!(!grouper.is_colinear(&a, &TextItem::from_rect("x", 300, 89, 50, 20)));
        // exactly half a height away sits on the boundary and is rejected
        assert!(!grouper.is_colinear(&a, &TextItem::from_rect("x", 300, 110, 50, 20)));
        assert!(grouper.is_colinear(&a, &TextItem::from_rect("x", 300, 109, 50, 20)));
    }

    #[test]
    fn test_unequal_heights_compare_midpoints() {
        let grouper = LineGrouper::new(Some(0.0));
        let short = TextItem::from_rect("Nama", 20, 100, 50, 20);
        let tall = TextItem::from_rect("BUDI", 300, 100, 50, 60);

        // same top edge, but the tall box's midpoint (130) is outside the short band
        assert!(grouper.is_colinear(&short, &tall));
        assert!(!grouper.is_colinear(&tall, &short));
    }

    #[test]
    fn test_extreme_coordinates() {
        let grouper = LineGrouper::new(Some(1.0));
        let far_left = TextItem::new(
            "NIK",
            [
                Vertex::new(-2_000_000_000, 0),
                Vertex::new(-1_999_999_950, 0),
                Vertex::new(-1_999_999_950, 20),
                Vertex::new(-2_000_000_000, 20),
            ],
        );
        let far_right = TextItem::new(
            "BUDI",
            [
                Vertex::new(2_000_000_000, 0),
                Vertex::new(2_000_000_040, 0),
                Vertex::new(2_000_000_040, 20),
                Vertex::new(2_000_000_000, 20),
            ],
        );
        assert!(!grouper.is_colinear(&far_left, &far_right));
        assert!(!grouper.is_colinear(&far_right, &far_left));
    }

    #[test]
    fn test_unknown_angle_is_level() {
        let grouper = LineGrouper::new(None);
        let a = TextItem::from_rect("Nama", 20, 100, 50, 20);
        let b = TextItem::from_rect("BUDI", 300, 104, 50, 20);
        assert!(grouper.is_colinear(&a, &b));
    }

    #[test]
    fn test_angle_correction() {
        // 10 degrees: 280 px to the right the baseline drops about 49 px
        let a = TextItem::from_rect("Nama", 20, 100, 50, 20);
        let b = TextItem::from_rect("BUDI", 300, 149, 50, 20);
        assert!(!LineGrouper::new(Some(0.0)).is_colinear(&a, &b));
        assert!(LineGrouper::new(Some(10.0)).is_colinear(&a, &b));
    }

    #[test]
    fn test_group_orders_lines_and_tokens() {
        let items = vec![
            TextItem::from_rect("BUDI", 200, 140, 60, 20),
            TextItem::from_rect("3201234567890123", 200, 100, 160, 20),
            TextItem::from_rect("Nama", 20, 141, 50, 20),
            TextItem::from_rect("NIK", 20, 99, 40, 20),
            TextItem::from_rect("SANTOSO", 268, 139, 80, 20),
        ];
        let grouped = LineGrouper::new(Some(0.0)).group(&items);

        assert_eq!(grouped.lines.len(), 2);
        assert_eq!(grouped.lines[0].tokens(), vec!["NIK", "3201234567890123"]);
        assert_eq!(grouped.lines[0].seed_y, 99);
        assert_eq!(grouped.lines[0].split, 1);
        assert_eq!(grouped.lines[1].tokens(), vec!["Nama", "BUDI", "SANTOSO"]);
        assert_eq!(grouped.lines[1].label_tokens(), vec!["Nama"]);
        assert_eq!(grouped.lines[1].value_tokens(), vec!["BUDI", "SANTOSO"]);
        assert!(grouped.unlabeled.is_empty());
    }

    #[test]
    fn test_group_is_independent_of_input_order() {
        let mut items = vec![
            TextItem::from_rect("KOTA", 150, 20, 50, 20),
            TextItem::from_rect("BANDUNG", 208, 21, 90, 20),
            TextItem::from_rect("NIK", 20, 60, 40, 20),
            TextItem::from_rect("3201234567890123", 200, 60, 160, 20),
        ];
        let forward: Vec<Vec<String>> = LineGrouper::new(None)
            .group(&items)
            .lines
            .iter()
            .map(|line| line.tokens().iter().map(|t| t.to_string()).collect())
            .collect();

        items.reverse();
        let backward: Vec<Vec<String>> = LineGrouper::new(None)
            .group(&items)
            .lines
            .iter()
            .map(|line| line.tokens().iter().map(|t| t.to_string()).collect())
            .collect();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_each_item_claimed_once() {
        let items = vec![
            TextItem::from_rect("KOTA", 150, 20, 50, 20),
            TextItem::from_rect("BANDUNG", 208, 20, 90, 20),
        ];
        let grouped = LineGrouper::new(None).group(&items);
        assert_eq!(grouped.lines.len(), 1);
        assert_eq!(grouped.unlabeled, vec![0]);
        assert_eq!(
            grouped.unlabeled_lines().next().map(|line| line.tokens()),
            Some(vec!["KOTA", "BANDUNG"])
        );
    }

    #[test]
    fn test_rotated_line_groups_together() {
        // boxes follow a 5 degree baseline
        let slope = 5.0_f64.to_radians().tan();
        let make = |text: &str, x: i32, width: i32| {
            let y0 = 100 + (slope * (x - 20) as f64).round() as i32;
            let y1 = 100 + (slope * (x + width - 20) as f64).round() as i32;
            TextItem::new(
                text,
                [
                    Vertex::new(x, y0),
                    Vertex::new(x + width, y1),
                    Vertex::new(x + width, y1 + 20),
                    Vertex::new(x, y0 + 20),
                ],
            )
        };
        let items = vec![make("Alamat", 20, 70), make("JL", 300, 30), make("MERDEKA", 338, 100)];
        let angle = crate::processing::skew::estimate_angle(&items);
        let grouped = LineGrouper::new(angle).group(&items);

        assert_eq!(grouped.lines.len(), 1);
        assert_eq!(grouped.lines[0].split, 1);
    }
}
