//! Demo application exercising every picker mode.

use std::cell::RefCell;
use std::io::stdout;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use modalpick::style::{TEXT_DIM, TEXT_WHITE, TINT_BLUE};
use modalpick::{
    CalendarParams, Config, DateMode, HostId, ModalPicker, PickerMode, PickerRegistry,
    PickerResponse, PickerStyle, ToolbarAction, Wheel, log, render_modal_picker,
};

/// Demo menu entries, one per picker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    Date,
    Time,
    DarkThemeDate,
    Fruit,
    MultiRows,
}

impl MenuEntry {
    const ALL: [MenuEntry; 5] = [
        MenuEntry::Date,
        MenuEntry::Time,
        MenuEntry::DarkThemeDate,
        MenuEntry::Fruit,
        MenuEntry::MultiRows,
    ];

    fn title(&self) -> &'static str {
        match self {
            MenuEntry::Date => "Select date",
            MenuEntry::Time => "Select time",
            MenuEntry::DarkThemeDate => "Select date (Dark theme)",
            MenuEntry::Fruit => "Select fruit",
            MenuEntry::MultiRows => "Select multi rows",
        }
    }
}

/// The main menu list.
struct Menu {
    entries: Vec<MenuEntry>,
    selected: usize,
}

impl Menu {
    fn new() -> Self {
        Self {
            entries: MenuEntry::ALL.to_vec(),
            selected: 0,
        }
    }
}

impl Wheel for Menu {
    type Item = MenuEntry;

    fn items(&self) -> &[MenuEntry] {
        &self.entries
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

struct DemoApp {
    menu: Menu,
    registry: PickerRegistry,
    host: HostId,
    status: Rc<RefCell<String>>,
    style: PickerStyle,
    date_format: String,
}

impl DemoApp {
    fn new(config: &Config) -> Self {
        Self {
            menu: Menu::new(),
            registry: PickerRegistry::new(),
            host: HostId::next(),
            status: Rc::new(RefCell::new("(nothing picked yet)".to_string())),
            style: config.style(),
            date_format: config.date_format().to_string(),
        }
    }

    fn standard_toolbar() -> Vec<ToolbarAction> {
        vec![
            ToolbarAction::Cancel("Cancel".into()),
            ToolbarAction::Spacer,
            ToolbarAction::Done,
        ]
    }

    /// Build and show the picker for the highlighted menu entry.
    fn open_selected(&mut self) {
        let Some(entry) = self.menu.selected_item().copied() else {
            return;
        };
        log::log_event(&format!("opening picker: {}", entry.title()));

        let status = Rc::clone(&self.status);
        let cancelled_status = Rc::clone(&self.status);
        let mut picker = match entry {
            MenuEntry::Date | MenuEntry::DarkThemeDate => {
                let params = CalendarParams::new().with_mode(DateMode::Date);
                let format = self.date_format.clone();
                let mut picker =
                    ModalPicker::new(PickerMode::Calendar(params), Self::standard_toolbar());
                picker.on_date_done(move |date| {
                    *status.borrow_mut() = format!("Picked date: {}", date.format(&format));
                });
                picker
            }
            MenuEntry::Time => {
                let params = CalendarParams::new().with_mode(DateMode::Time);
                let mut picker =
                    ModalPicker::new(PickerMode::Calendar(params), Self::standard_toolbar());
                picker.on_date_done(move |date| {
                    *status.borrow_mut() = format!("Picked time: {}", date.format("%H:%M"));
                });
                picker
            }
            MenuEntry::Fruit => {
                let reset_status = Rc::clone(&self.status);
                let mode = PickerMode::SingleList {
                    items: vec![
                        "Apple".into(),
                        "Avocado".into(),
                        "Banana".into(),
                        "Blackberries".into(),
                    ],
                    selected_index: Some(2),
                };
                let actions = vec![
                    ToolbarAction::Cancel("Cancel".into()),
                    ToolbarAction::Custom {
                        label: "Hello".into(),
                        on_press: Box::new(move || {
                            *reset_status.borrow_mut() = "Hello from a custom action".to_string();
                        }),
                    },
                    ToolbarAction::Spacer,
                    ToolbarAction::Done,
                ];
                let mut picker = ModalPicker::new(mode, actions);
                picker.on_value_done(move |value, index| {
                    *status.borrow_mut() = format!("Picked fruit: {} (row {})", value, index);
                });
                picker
            }
            MenuEntry::MultiRows => {
                let mode = PickerMode::MultiColumnList {
                    columns: vec![
                        vec![
                            "iPhone".into(),
                            "iPad".into(),
                            "MacBook".into(),
                            "Mac mini".into(),
                        ],
                        vec![
                            "AirPods".into(),
                            "AirPods Pro".into(),
                            "AirPods Max".into(),
                        ],
                    ],
                    selected_indexes: vec![Some(2), Some(1)],
                };
                let mut picker = ModalPicker::new(mode, Self::standard_toolbar());
                picker.on_multi_value_done(move |values, indexes| {
                    *status.borrow_mut() =
                        format!("Picked: {} (rows {:?})", values.join(" + "), indexes);
                });
                picker
            }
        };

        picker.on_cancelled(move || {
            *cancelled_status.borrow_mut() = "Cancelled".to_string();
        });

        picker.set_style(match entry {
            MenuEntry::DarkThemeDate => PickerStyle::dark(),
            _ => self.style,
        });

        self.registry.show(self.host, picker);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let config = Config::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = DemoApp::new(&config);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut DemoApp) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(Ok(Event::Key(key))) = maybe_event else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // While a picker is attached it owns the keyboard.
                if app.registry.is_attached(app.host) {
                    match app.registry.handle_key(app.host, key) {
                        PickerResponse::Committed => log::log_event("picker committed"),
                        PickerResponse::Cancelled => log::log_event("picker cancelled"),
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('j') | KeyCode::Down => app.menu.select_next(),
                    KeyCode::Char('k') | KeyCode::Up => app.menu.select_prev(),
                    KeyCode::Enter => app.open_selected(),
                    _ => {}
                }
            }
        }
    }
}

fn render(frame: &mut Frame, app: &DemoApp) {
    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Menu
        Constraint::Length(2), // Status + hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_menu(frame, main_layout[1], app);
    render_footer(frame, main_layout[2], app);

    if let Some(picker) = app.registry.active(app.host) {
        render_modal_picker(frame, area, picker);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let padding = (area.width.saturating_sub(9)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("modal", Style::new().fg(TINT_BLUE).bold()),
        Span::styled("pick", Style::new().fg(TEXT_WHITE).bold()),
    ]);
    frame.render_widget(Paragraph::new(centered), area);
}

fn render_menu(frame: &mut Frame, area: Rect, app: &DemoApp) {
    let mut lines: Vec<Line> = vec![];

    for (i, entry) in app.menu.items().iter().enumerate() {
        let is_selected = i == app.menu.selected_index();
        let cursor = if is_selected { "> " } else { "  " };

        let style = if is_selected {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, Style::new().fg(TINT_BLUE)),
            Span::styled(entry.title(), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DemoApp) {
    let lines = vec![
        Line::from(vec![Span::styled(
            app.status.borrow().clone(),
            Style::new().fg(TEXT_WHITE),
        )]),
        Line::from(vec![
            Span::styled("[j/k]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" move · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" open picker · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" quit", Style::new().fg(TEXT_DIM)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
