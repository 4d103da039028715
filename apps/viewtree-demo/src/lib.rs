//! Sample screen and measurement scenarios for the viewtree demo.

#![allow(non_snake_case)]

mod options;

pub use options::DemoOptions;

use anyhow::Context;
use viewtree_ui::{
    format_layout_tree, Constraint, DimensionSpec, LayoutParams, LayoutTree, NodeError, NodeId,
};

/// One measure + layout run of the sample screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub title: String,
    pub width: Constraint,
    pub height: Constraint,
}

impl Scenario {
    pub fn new(title: impl Into<String>, width: Constraint, height: Constraint) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }
}

/// Runs the demo configured by `options`, or the four standard runs if none
/// were added.
pub fn default_scenarios(options: &DemoOptions) -> Vec<Scenario> {
    if !options.scenarios.is_empty() {
        return options.scenarios.clone();
    }
    let width = options.screen_width;
    let height = options.screen_height;
    vec![
        Scenario::new(
            "Measuring Root with EXACTLY width and AT_MOST height (scrolling parent)",
            Constraint::exactly(width),
            Constraint::at_most(height),
        ),
        Scenario::new(
            "Measuring Root with EXACTLY width and EXACTLY height (fixed size parent)",
            Constraint::exactly(width),
            Constraint::exactly(600),
        ),
        Scenario::new(
            "Measuring Root with UNSPECIFIED width and height",
            Constraint::unspecified(width),
            Constraint::unspecified(height),
        ),
        Scenario::new(
            "Measuring Root with a very small EXACTLY constraint",
            Constraint::exactly(300),
            Constraint::exactly(250),
        ),
    ]
}

fn params(width: DimensionSpec, height: DimensionSpec) -> LayoutParams {
    LayoutParams::new(width, height)
}

/// Builds header, a two-item content column and a footer under one root.
pub fn build_sample_screen(tree: &mut LayoutTree) -> Result<NodeId, NodeError> {
    use DimensionSpec::{Exact, FillParent, FitContent};

    let root = tree.create_container("Root");
    tree.set_layout_params(root, params(FillParent, FillParent))?;

    let header = tree.create_node("Header");
    tree.set_layout_params(header, params(FillParent, Exact(100)))?;

    let content = tree.create_container("Content");
    tree.set_layout_params(content, params(FillParent, FitContent))?;

    let item1 = tree.create_node("Item1");
    tree.set_layout_params(item1, params(FillParent, Exact(150)))?;

    let item2 = tree.create_node("Item2");
    tree.set_layout_params(item2, params(FillParent, Exact(200)))?;

    let footer = tree.create_node("Footer");
    tree.set_layout_params(footer, params(FillParent, Exact(150)))?;

    tree.add_child(content, item1)?;
    tree.add_child(content, item2)?;

    tree.add_child(root, header)?;
    tree.add_child(root, content)?;
    tree.add_child(root, footer)?;
    Ok(root)
}

/// Measures and lays out a fresh sample screen, returning the printed tree.
pub fn run_scenario(scenario: &Scenario) -> anyhow::Result<String> {
    let mut tree = LayoutTree::new();
    let root = build_sample_screen(&mut tree).context("building sample screen")?;

    log::debug!(
        "{}: width {}, height {}",
        scenario.title,
        scenario.width,
        scenario.height
    );
    tree.measure(root, scenario.width, scenario.height)?;

    let size = tree.get(root)?.measured_size();
    let right = i32::try_from(size.width).context("root width overflows a coordinate")?;
    let bottom = i32::try_from(size.height).context("root height overflows a coordinate")?;
    tree.layout(root, 0, 0, right, bottom)?;

    Ok(format_layout_tree(&tree, root)?)
}
