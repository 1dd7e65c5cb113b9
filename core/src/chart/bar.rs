use rust_decimal::prelude::ToPrimitive;

use super::{
    draw_grid, placeholder, ChartStyle, DrawOp, Plot, Point, Scene, TextAlign, Viewport,
    EXPENSE_COLOR, INCOME_COLOR, LABEL_COLOR,
};
use crate::aggregation::MonthFlow;
use crate::format::{month_short, Locale};

const BAR_RATIO: f64 = 0.35;
const LEGEND_Y: f64 = 15.0;
const LEGEND_SWATCH: f64 = 15.0;

/// One slot of the income/expense chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub income: f64,
    pub expense: f64,
}

impl BarGroup {
    pub fn from_flows(flows: &[MonthFlow], locale: Locale) -> Vec<BarGroup> {
        flows
            .iter()
            .map(|flow| BarGroup {
                label: month_short(flow.month.month(), locale).to_string(),
                income: flow.income.to_f64().unwrap_or(0.0),
                expense: flow.expense.to_f64().unwrap_or(0.0),
            })
            .collect()
    }
}

/// Paired income/expense bars per group, scaled against the largest bar,
/// with month labels below and a two-entry legend above.
pub fn render_bar_chart(groups: &[BarGroup], viewport: Viewport, style: &ChartStyle) -> Scene {
    let max = groups
        .iter()
        .map(|g| g.income.max(g.expense))
        .fold(0.0, f64::max);
    if groups.is_empty() || max <= 0.0 {
        return placeholder(viewport, style.locale.no_data());
    }

    let plot = Plot::new(viewport, style.padding);
    let mut scene = Scene::new(viewport);
    draw_grid(&mut scene, &plot, |i| max - max / 4.0 * i as f64);

    let spacing = plot.width() / groups.len() as f64;
    let bar_width = spacing * BAR_RATIO;

    for (index, group) in groups.iter().enumerate() {
        let x = plot.left + spacing * index as f64 + spacing / 2.0;

        let income_height = group.income.max(0.0) / max * plot.height();
        scene.push(DrawOp::Rect {
            x: x - bar_width,
            y: plot.bottom - income_height,
            width: bar_width,
            height: income_height,
            color: INCOME_COLOR,
        });

        let expense_height = group.expense.max(0.0) / max * plot.height();
        scene.push(DrawOp::Rect {
            x,
            y: plot.bottom - expense_height,
            width: bar_width,
            height: expense_height,
            color: EXPENSE_COLOR,
        });

        scene.push(DrawOp::Text {
            text: group.label.clone(),
            at: Point::new(x, plot.bottom + 20.0),
            color: LABEL_COLOR,
            size: 11.0,
            align: TextAlign::Center,
        });
    }

    draw_legend(&mut scene, viewport.width / 2.0, style.locale);
    scene
}

fn draw_legend(scene: &mut Scene, center_x: f64, locale: Locale) {
    let entries = [
        (center_x - 80.0, center_x - 60.0, INCOME_COLOR, locale.income_label()),
        (center_x + 10.0, center_x + 30.0, EXPENSE_COLOR, locale.expense_label()),
    ];
    for (swatch_x, text_x, color, label) in entries {
        scene.push(DrawOp::Rect {
            x: swatch_x,
            y: LEGEND_Y,
            width: LEGEND_SWATCH,
            height: LEGEND_SWATCH,
            color,
        });
        scene.push(DrawOp::Text {
            text: label.to_string(),
            at: Point::new(text_x, LEGEND_Y + 12.0),
            color: LABEL_COLOR,
            size: 12.0,
            align: TextAlign::Left,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::six_month_series;
    use crate::store::Snapshot;
    use crate::testing::{date, today, transaction};
    use shared::TransactionKind::{Expense, Income};

    const VIEWPORT: Viewport = Viewport::new(400.0, 220.0);

    fn group(label: &str, income: f64, expense: f64) -> BarGroup {
        BarGroup {
            label: label.to_string(),
            income,
            expense,
        }
    }

    fn rects(scene: &Scene) -> Vec<(f64, f64, f64, f64)> {
        scene
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_all_zero_shows_no_data() {
        let groups = vec![group("set", 0.0, 0.0); 6];
        let scene = render_bar_chart(&groups, VIEWPORT, &ChartStyle::default());
        assert_eq!(scene.texts(), vec!["Nessun dato disponibile"]);

        let empty = render_bar_chart(&[], VIEWPORT, &ChartStyle::default());
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_bars_scaled_against_largest_value() {
        // 300px wide plot split into 3 slots of 100px, bars 35px wide
        let groups = vec![
            group("gen", 1000.0, 500.0),
            group("feb", 0.0, 250.0),
            group("mar", 200.0, 0.0),
        ];
        let scene = render_bar_chart(&groups, VIEWPORT, &ChartStyle::default());
        let bars = rects(&scene);

        assert_eq!(bars[0], (65.0, 50.0, 35.0, 120.0));
        assert_eq!(bars[1], (100.0, 110.0, 35.0, 60.0));
        assert_eq!(bars[2], (165.0, 170.0, 35.0, 0.0));
        assert_eq!(bars[3], (200.0, 140.0, 35.0, 30.0));
        assert_eq!(bars[4].3, 24.0);
    }

    #[test]
    fn test_labels_and_legend() {
        let groups = vec![group("gen", 1000.0, 500.0), group("feb", 400.0, 600.0)];
        let scene = render_bar_chart(&groups, VIEWPORT, &ChartStyle::default());

        assert_eq!(
            scene.texts(),
            vec![
                "€1.000k", "€0.750k", "€0.500k", "€0.250k", "€0.000k", "gen", "feb", "Entrate",
                "Uscite"
            ]
        );

        let bars = rects(&scene);
        let legend = &bars[bars.len() - 2..];
        assert_eq!(legend[0], (120.0, 15.0, 15.0, 15.0));
        assert_eq!(legend[1], (210.0, 15.0, 15.0, 15.0));
    }

    #[test]
    fn test_groups_from_six_month_series() {
        let snapshot = Snapshot {
            transactions: vec![
                transaction(1, Income, "Stipendio", "1500", date(2023, 9, 27)),
                transaction(2, Expense, "Affitto", "-700", date(2024, 2, 1)),
            ],
            ..Snapshot::default()
        };
        let groups = BarGroup::from_flows(&six_month_series(&snapshot, today()), Locale::English);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert_eq!(groups[0].income, 1500.0);
        assert_eq!(groups[5].expense, 700.0);
    }
}
