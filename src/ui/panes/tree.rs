//! Tree pane rendering with selection and collapsible nodes
//!
//! The tree is flattened into [`TreeRow`]s in print order, skipping the
//! subtrees of collapsed nodes. Nodes are identified by their [`NodePath`],
//! the child indices leading from the root, so collapse state survives
//! re-rendering as long as the tree shape does.

use crate::parser::ast::{Node, SourceLocation};
use crate::parser::parse::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Child indices from the root to a node. The root is the empty path.
pub type NodePath = Vec<usize>;

/// One visible line of the tree pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: NodePath,
    pub depth: usize,
    pub label: String,
    pub location: Option<SourceLocation>,
    pub kind: RowKind,
    pub has_children: bool,
    pub collapsed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Number,
    Operator,
    Grouping,
}

/// Flatten `root` into visible rows, hiding the descendants of collapsed paths.
pub fn visible_rows(root: Option<&Node>, collapsed: &FxHashSet<NodePath>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    if let Some(root) = root {
        let mut path = Vec::new();
        collect_rows(root, &mut path, collapsed, &mut rows);
    }
    rows
}

fn collect_rows(
    node: &Node,
    path: &mut NodePath,
    collapsed: &FxHashSet<NodePath>,
    rows: &mut Vec<TreeRow>,
) {
    let Some(label) = node.tag() else {
        return;
    };
    let kind = match node {
        Node::Number(..) => RowKind::Number,
        Node::Grouping { .. } => RowKind::Grouping,
        _ => RowKind::Operator,
    };
    let children = node.children();
    let has_children = children.iter().any(|child| child.tag().is_some());
    let is_collapsed = has_children && collapsed.contains(&*path);

    rows.push(TreeRow {
        path: path.clone(),
        depth: path.len(),
        label,
        location: node.location(),
        kind,
        has_children,
        collapsed: is_collapsed,
    });

    if is_collapsed {
        return;
    }
    for (index, child) in children.into_iter().enumerate() {
        path.push(index);
        collect_rows(child, path, collapsed, rows);
        path.pop();
    }
}

fn row_line(row: &TreeRow, is_selected: bool) -> Line<'static> {
    let marker = match (row.has_children, row.collapsed) {
        (true, true) => "▸ ",
        (true, false) => "▾ ",
        (false, _) => "  ",
    };
    let label_style = match row.kind {
        RowKind::Number => Style::default().fg(DEFAULT_THEME.number),
        RowKind::Operator => Style::default()
            .fg(DEFAULT_THEME.operator)
            .add_modifier(Modifier::BOLD),
        RowKind::Grouping => Style::default().fg(DEFAULT_THEME.grouping),
    };

    let mut spans = vec![
        Span::raw("  ".repeat(row.depth)),
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(row.label.clone(), label_style),
    ];
    if let Some(location) = row.location {
        spans.push(Span::styled(
            format!("  @{}", location),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let mut line = Line::from(spans);
    if is_selected {
        line = line.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
    }
    line
}

/// Render the tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[TreeRow],
    error: Option<&ParseError>,
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(err) = error {
        let paragraph = Paragraph::new(err.to_string())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.error));
        frame.render_widget(paragraph, area);
        return;
    }

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Keep the selection inside the window
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, row)| row_line(row, is_focused && idx == selected))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
