//! src/app.rs
//!
//! # Shortest Path Finder
//!
//! Interactive terminal application: build a weighted undirected graph one
//! edge at a time, pick two endpoints, compute the minimum-weight path and
//! show it as a node-link diagram in the terminal and as a Leaflet map in
//! the browser.
//!
//! # Keyboard Controls
//!
//! - **Tab / Shift+Tab** — Move focus between *Node 1*, *Node 2*, *Weight*,
//!   *Source* and *Target*.
//! - **Enter** — On a form field: add the edge. On a selector: find the path.
//! - **← → / ↑ ↓** — Cycle the focused selector through the known nodes.
//! - **F5** — Find the shortest path.
//! - **F6** — Display the map (`path_map.html`, opened in the browser).
//! - **Esc** — Close a dialog or the diagram view.
//! - **Ctrl+C / Ctrl+Q** — Quit and restore the terminal.
//!
//! # Actions
//!
//! *Find shortest path* checks that edges exist and two different nodes are
//! selected, runs the path engine, then shows the diagram and writes the map.
//! A disconnected pair produces a warning and nothing is drawn.
//!
//! *Display on map* always draws the map once edges exist; the path line is
//! included only when two different, connected nodes are selected.
//!
//! Every failure is reported in a modal dialog and leaves the session usable.

pub mod dialog;
pub mod form;

use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction};

use crate::config::AppConfig;
use crate::graph::path::check_edges;
use crate::graph::{GraphStore, ShortestPath, build_graph, shortest_path};
use crate::panels::{
    DiagramPanel, DialogPanel, EdgeListPanel, FormPanel, HelpPanel, ResultPanel, SelectorPanel,
    TitlePanel,
};
use crate::render::{Browser, Diagram, SystemBrowser, render_diagram, render_map};
use crate::ui::{Node, Panel, group, leaf};
use dialog::Dialog;
use form::{EdgeForm, Field, cycle};

const MAIN_KEYS: &[(&str, &str)] = &[
    ("Tab", "focus"),
    ("Enter", "add / find"),
    ("←→", "choose node"),
    ("F5", "find shortest path"),
    ("F6", "display on map"),
    ("^Q", "quit"),
];

const DIAGRAM_KEYS: &[(&str, &str)] = &[("Esc", "close diagram"), ("^Q", "quit")];

/// Session state. Owns the graph store; panels borrow it per frame.
pub struct App {
    config: AppConfig,
    store: GraphStore,
    form: EdgeForm,
    focus: Field,
    source: Option<String>,
    target: Option<String>,
    path: Option<ShortestPath>,
    diagram: Option<Diagram>,
    dialog: Option<Dialog>,
    browser: Box<dyn Browser>,
    running: bool,
}

impl App {
    pub fn new(config: AppConfig, browser: Box<dyn Browser>) -> Self {
        Self {
            store: GraphStore::new(config.coordinates.clone()),
            config,
            form: EdgeForm::default(),
            focus: Field::NodeA,
            source: None,
            target: None,
            path: None,
            diagram: None,
            dialog: None,
            browser,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Dispatch one key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.running = false;
            return;
        }

        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dialog = None;
            }
            return;
        }
        if self.diagram.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.diagram = None;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::F(5) => self.find_shortest_path(),
            KeyCode::F(6) => self.display_map(),
            KeyCode::Enter if self.focus.is_text() => self.add_edge(),
            KeyCode::Enter => self.find_shortest_path(),
            KeyCode::Backspace => self.form.pop(self.focus),
            KeyCode::Char(c) => self.form.push(self.focus, c),
            KeyCode::Right | KeyCode::Down => self.cycle_selection(true),
            KeyCode::Left | KeyCode::Up => self.cycle_selection(false),
            _ => {}
        }
    }

    /// Read the form and record the edge; clears the form on success.
    pub fn add_edge(&mut self) {
        let EdgeForm {
            node_a,
            node_b,
            weight,
        } = &self.form;
        match self.store.add_edge(node_a, node_b, weight) {
            Ok(_) => {
                self.form.clear();
                self.focus = Field::NodeA;
            }
            Err(e) => {
                tracing::warn!(error = %e, "edge rejected");
                self.dialog = Some(Dialog::from(&e));
            }
        }
    }

    /// Run the path engine on the current selection and show the result in
    /// both views.
    pub fn find_shortest_path(&mut self) {
        let source = self.source.as_deref().unwrap_or_default();
        let target = self.target.as_deref().unwrap_or_default();

        let path = match shortest_path(&self.store, source, target) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "path request failed");
                self.dialog = Some(Dialog::from(&e));
                return;
            }
        };

        let graph = build_graph(&self.store);
        self.diagram = Some(render_diagram(&graph, &path, &self.config.layout));
        if let Err(e) = render_map(
            self.store.positions(),
            Some(&path),
            &self.config.map,
            self.browser.as_ref(),
        ) {
            tracing::error!(error = %e, "map render failed");
            self.dialog = Some(Dialog::from(&e));
        }
        self.path = Some(path);
    }

    /// Write and open the map, with the path line when one can be found.
    pub fn display_map(&mut self) {
        if let Err(e) = check_edges(&self.store) {
            self.dialog = Some(Dialog::from(&e));
            return;
        }

        let source = self.source.as_deref().unwrap_or_default();
        let target = self.target.as_deref().unwrap_or_default();
        let mut path = None;
        if !source.is_empty() && !target.is_empty() && source != target {
            match shortest_path(&self.store, source, target) {
                Ok(p) => path = Some(p),
                Err(e) => {
                    tracing::warn!(error = %e, "map shown without path");
                    self.dialog = Some(Dialog::from(&e));
                }
            }
        }

        if let Err(e) = render_map(
            self.store.positions(),
            path.as_ref(),
            &self.config.map,
            self.browser.as_ref(),
        ) {
            tracing::error!(error = %e, "map render failed");
            self.dialog = Some(Dialog::from(&e));
        }
    }

    fn cycle_selection(&mut self, forward: bool) {
        let nodes: Vec<&str> = self.store.nodes().collect();
        let slot = match self.focus {
            Field::Source => &mut self.source,
            Field::Target => &mut self.target,
            _ => return,
        };
        *slot = cycle(slot.as_deref(), &nodes, forward);
    }

    /// Compose this frame's panel tree.
    fn layout(&self) -> Node<'_> {
        let title = leaf(TitlePanel::new(
            &self.config.title,
            self.store.node_count(),
            self.store.edges().len(),
        ));

        if let Some(diagram) = &self.diagram {
            return group(
                Direction::Vertical,
                vec![
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(3),
                ],
                vec![
                    title,
                    leaf(DiagramPanel { diagram }),
                    leaf(HelpPanel::new(DIAGRAM_KEYS, "Controls")),
                ],
            );
        }

        let left = group(
            Direction::Vertical,
            vec![
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(4),
            ],
            vec![
                leaf(FormPanel::new(&self.form, self.focus)),
                leaf(SelectorPanel {
                    source: self.source.as_deref(),
                    target: self.target.as_deref(),
                    focus: self.focus,
                    choices: self.store.node_count(),
                }),
                leaf(ResultPanel {
                    path: self.path.as_ref(),
                }),
            ],
        );

        group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ],
            vec![
                title,
                group(
                    Direction::Horizontal,
                    vec![Constraint::Percentage(60), Constraint::Percentage(40)],
                    vec![
                        left,
                        leaf(EdgeListPanel::new(self.store.edges(), self.path.as_ref())),
                    ],
                ),
                leaf(HelpPanel::new(MAIN_KEYS, "Controls")),
            ],
        )
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        let area = f.area();
        self.layout().draw(f, area);
        if let Some(dialog) = &self.dialog {
            DialogPanel { dialog }.draw(f, area);
        }
    }
}

pub fn run(config: AppConfig) -> color_eyre::Result<()> {
    let frame_time = config.frame_time;
    let mut app = App::new(config, Box::new(SystemBrowser::default()));
    tracing::info!("session started");

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, frame_time);
    ratatui::restore();

    tracing::info!("session ended");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    frame_time: Duration,
) -> color_eyre::Result<()> {
    while app.is_running() {
        let frame_start = Instant::now();

        terminal
            .draw(|f| app.draw(f))
            .wrap_err("failed to draw frame")?;

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(())
}
