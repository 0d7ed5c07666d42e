use std::f64::consts::{FRAC_PI_2, TAU};

use yew::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::render::ChartView;

const CANVAS_SIZE: u32 = 240;
/// Line segments per full turn when approximating the arcs
const ARC_STEPS: f64 = 180.0;

#[derive(Properties, PartialEq)]
pub struct SpendingChartProps {
    pub chart: ChartView,
}

pub enum Msg {
    Hover(Option<usize>),
}

pub struct SpendingChart {
    canvas_ref: NodeRef,
    hovered: Option<usize>,
}

impl Component for SpendingChart {
    type Message = Msg;
    type Properties = SpendingChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            hovered: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hover(index) => {
                let changed = self.hovered != index;
                self.hovered = index;
                changed
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.hovered = None;
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(&ctx.props().chart);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let chart = &ctx.props().chart;
        let link = ctx.link();

        let on_mouse_move = {
            let chart = chart.clone();
            link.callback(move |e: MouseEvent| {
                Msg::Hover(slice_at(&chart, e.offset_x() as f64, e.offset_y() as f64))
            })
        };
        let on_mouse_leave = link.callback(|_: MouseEvent| Msg::Hover(None));

        let tooltip = self.hovered.and_then(|index| {
            let label = chart.labels.get(index)?;
            let value = chart.values.get(index)?;
            Some(html! {
                <div class="chart-tooltip">
                    <strong>{label}</strong>
                    <span>{ChartView::tooltip(*value)}</span>
                </div>
            })
        });

        html! {
            <section class="spending-section">
                <h2>{"Spending This Month"}</h2>
                {if chart.is_empty() {
                    html! { <div class="chart-empty"><p>{"No spending recorded this month"}</p></div> }
                } else {
                    html! {
                        <div class="chart-content">
                            <div class="chart-canvas-wrapper">
                                <canvas
                                    ref={self.canvas_ref.clone()}
                                    class="spending-chart-canvas"
                                    width={CANVAS_SIZE.to_string()}
                                    height={CANVAS_SIZE.to_string()}
                                    onmousemove={on_mouse_move}
                                    onmouseleave={on_mouse_leave}
                                ></canvas>
                                <div class="chart-total">
                                    <span class="chart-total-label">{"Total"}</span>
                                    <span class="chart-total-value">{&chart.total_label}</span>
                                </div>
                                {tooltip.unwrap_or_default()}
                            </div>
                            <ul class="chart-legend">
                                {for chart.legend.iter().map(|entry| html! {
                                    <li class="chart-legend-item">
                                        <span class="chart-legend-swatch" style={format!("background: {}", entry.color)}></span>
                                        <span class="chart-legend-label">{&entry.label}</span>
                                        <span class="chart-legend-amount">{&entry.amount_label}</span>
                                        <span class="chart-legend-share">{format!("{}%", entry.share_percent)}</span>
                                    </li>
                                })}
                            </ul>
                        </div>
                    }
                }}
            </section>
        }
    }
}

impl SpendingChart {
    fn draw_chart(&self, chart: &ChartView) {
        if chart.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let center = CANVAS_SIZE as f64 / 2.0;
        let outer = center - 4.0;
        let inner = outer * chart.cutout_percent as f64 / 100.0;
        let total: f64 = chart.values.iter().sum();

        // Slices run clockwise from twelve o'clock
        let mut start = -FRAC_PI_2;
        for (value, color) in chart.values.iter().zip(&chart.colors) {
            let sweep = value / total * TAU;
            let points = ring_segment((center, center), inner, outer, start, start + sweep);
            if root.draw(&Polygon::new(points, parse_hex_color(color).filled())).is_err() {
                return;
            }
            start += sweep;
        }

        let _ = root.present();
    }
}

/// Outline of one doughnut slice: outer arc forwards, inner arc backwards.
fn ring_segment(center: (f64, f64), inner: f64, outer: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = (((end - start) / TAU) * ARC_STEPS).ceil().max(1.0) as usize;
    let point = |radius: f64, angle: f64| {
        (
            (center.0 + radius * angle.cos()).round() as i32,
            (center.1 + radius * angle.sin()).round() as i32,
        )
    };

    let mut points = Vec::with_capacity(2 * (steps + 1));
    for step in 0..=steps {
        let angle = start + (end - start) * step as f64 / steps as f64;
        points.push(point(outer, angle));
    }
    for step in (0..=steps).rev() {
        let angle = start + (end - start) * step as f64 / steps as f64;
        points.push(point(inner, angle));
    }
    points
}

/// Which slice sits under a canvas coordinate, if any.
fn slice_at(chart: &ChartView, x: f64, y: f64) -> Option<usize> {
    let center = CANVAS_SIZE as f64 / 2.0;
    let outer = center - 4.0;
    let inner = outer * chart.cutout_percent as f64 / 100.0;
    let (dx, dy) = (x - center, y - center);
    let distance = (dx * dx + dy * dy).sqrt();
    if distance < inner || distance > outer {
        return None;
    }

    let total: f64 = chart.values.iter().sum();
    if total <= 0.0 {
        return None;
    }

    // Angle measured clockwise from twelve o'clock, in 0..TAU
    let angle = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
    let mut start = 0.0;
    for (index, value) in chart.values.iter().enumerate() {
        let end = start + value / total * TAU;
        if angle < end {
            return Some(index);
        }
        start = end;
    }
    None
}

fn parse_hex_color(hex: &str) -> RGBColor {
    let channel = |range: std::ops::Range<usize>| {
        hex.trim_start_matches('#')
            .get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0x99)
    };
    RGBColor(channel(0..2), channel(2..4), channel(4..6))
}
