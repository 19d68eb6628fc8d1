use serde::Serialize;

/// Bar glyph used by the text renderer
const BAR: char = '█';

/// A chart-ready series: one value per category, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub index_label: String,
    pub value_label: String,
    pub points: Vec<(String, u64)>,
}

impl ChartSeries {
    pub fn new(
        index_label: impl Into<String>,
        value_label: impl Into<String>,
        points: Vec<(String, u64)>,
    ) -> Self {
        Self {
            index_label: index_label.into(),
            value_label: value_label.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_value(&self) -> u64 {
        self.points.iter().map(|(_, v)| *v).max().unwrap_or(0)
    }

    /// Horizontal bar chart, longest bar `width` cells wide
    ///
    /// Any non-zero value gets at least one cell unless `width` is zero, in
    /// which case only labels and values are drawn.
    pub fn render_bars(&self, width: usize) -> String {
        let max = self.max_value();
        let label_width = self
            .points
            .iter()
            .map(|(c, _)| c.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.index_label.chars().count());

        let mut out = format!(
            "{:<lw$}  {}\n",
            self.index_label,
            self.value_label,
            lw = label_width
        );
        for (category, value) in &self.points {
            let cells = if max == 0 || width == 0 {
                0
            } else {
                ((*value as u128 * width as u128) / max as u128).max(1) as usize
            };
            let cells = if *value == 0 { 0 } else { cells };
            let bar: String = std::iter::repeat(BAR).take(cells).collect();
            out.push_str(&format!(
                "{:<lw$}  {} {}\n",
                category,
                bar,
                value,
                lw = label_width
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_scale_to_width() {
        let series = ChartSeries::new(
            "Asset Condition",
            "Count",
            vec![("Good".to_string(), 10), ("Poor".to_string(), 5)],
        );
        let rendered = series.render_bars(20);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].matches(BAR).count(), 20);
        assert_eq!(lines[2].matches(BAR).count(), 10);
        assert!(lines[2].ends_with(" 5"));
    }

    #[test]
    fn test_small_values_still_visible() {
        let series = ChartSeries::new(
            "Funding Source",
            "Count",
            vec![("A".to_string(), 1000), ("B".to_string(), 1)],
        );
        let rendered = series.render_bars(10);
        let last = rendered.lines().last().unwrap();
        assert_eq!(last.matches(BAR).count(), 1);
    }

    #[test]
    fn test_zero_width_draws_no_bars() {
        let series = ChartSeries::new(
            "Asset Condition",
            "Count",
            vec![("Good".to_string(), 3), ("Poor".to_string(), 1)],
        );
        let rendered = series.render_bars(0);

        assert_eq!(rendered.matches(BAR).count(), 0);
        assert!(rendered.lines().nth(1).is_some_and(|l| l.ends_with(" 3")));
    }

    #[test]
    fn test_empty_series_renders_header_only() {
        let series = ChartSeries::new("Asset Condition", "Count", Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.render_bars(10).lines().count(), 1);
    }
}
