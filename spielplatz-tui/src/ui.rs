use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};
use spielplatz_core::{
    catalog::{
        KNOWN_WATER_PLAYGROUNDS, MAX_AGE_TAG, MIN_AGE_TAG, OFFICIAL_SOURCES, OPERATOR_TAG,
        OSM_COPYRIGHT_URL, SURFACE_TAG, district_reference_url,
    },
    filter::{UNASSIGNED_DISTRICT, count_by_district},
    model::{FilterToggle, Playground},
};

use crate::app::{App, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, filters, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, filter_area, content_area, status_area] = chunks else {
        return;
    };

    let loaded = app.snapshot.as_ref().map_or_else(String::new, |snapshot| {
        let local = snapshot.fetched_at().with_timezone(&Local);
        format!(" · {} playgrounds, loaded {}", snapshot.len(), local.format("%H:%M"))
    });
    let header = Paragraph::new(format!("spielplatz – playgrounds in Mainz{loaded}")).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Spielplatz")
            .title_bottom(format!("Map data © OpenStreetMap contributors ({OSM_COPYRIGHT_URL})")),
    );
    frame.render_widget(header, *header_area);

    draw_filter_bar(frame, app, *filter_area);

    // Main screen
    if app.snapshot.is_none() {
        draw_placeholder(frame, app, *content_area);
    } else {
        match app.screen {
            Screen::List => draw_list(frame, app, *content_area),
            Screen::Detail => draw_detail(frame, app, *content_area),
            Screen::Districts => draw_districts(frame, app, *content_area),
        }
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::List => "↑/↓ move · Enter details · Tab districts · 1-7 filters · d/D district · c clear · r reload · q quit",
        Screen::Detail => "↑/↓ next/previous · Esc/←/b back · 1-7 filters · r reload · q quit",
        Screen::Districts => "Tab/Esc back · d/D district · c clear · r reload · q quit",
    };

    let status_text = if app.is_loading {
        format!("Loading playgrounds… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_filter_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let toggles = FilterToggle::ALL
        .iter()
        .enumerate()
        .map(|(idx, toggle)| {
            let active = app.criteria.is_active(*toggle);
            let style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Span::styled(
                format!(" {} {} {} ", idx + 1, toggle.glyph(), toggle.label()),
                style,
            )
        })
        .collect::<Vec<Span<'_>>>();

    let district = app.criteria.district_filter().unwrap_or("All districts");
    let reset_hint = if app.criteria.is_empty() {
        String::new()
    } else {
        format!(" · {} active (c to reset)", app.criteria.active_count())
    };
    let summary = Line::from(format!(
        "District: {district} · {} of {} playgrounds{reset_hint}",
        app.view.len(),
        app.total()
    ));

    let paragraph = Paragraph::new(vec![Line::from(toggles), summary])
        .block(Block::default().borders(Borders::ALL).title("Filters"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_placeholder(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = if app.is_loading {
        "Loading playgrounds from OpenStreetMap…"
    } else if app.error_message.is_some() {
        "Playgrounds could not be loaded. Press r to try again."
    } else {
        "No data yet. Press r to load playgrounds."
    };
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Playgrounds"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = if app.view.is_empty() {
        vec![ListItem::new(
            "No playgrounds match these filters. Try removing some (c clears all).",
        )]
    } else {
        app.view.iter().map(list_item).collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} playgrounds found", app.view.len())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.view.is_empty() {
        state.select(Some(app.list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn list_item(playground: &Playground) -> ListItem<'static> {
    let icon = if playground.is_water_playground {
        "🌊"
    } else {
        "🎠"
    };
    let glyphs = playground
        .equipment
        .iter()
        .take(3)
        .map(|equipment| equipment.glyph())
        .collect::<String>();
    let more = playground.equipment.len().saturating_sub(3);
    let more = if more > 0 {
        format!(" +{more}")
    } else {
        String::new()
    };
    let district = playground.district.as_deref().unwrap_or("–");

    ListItem::new(format!(
        "{icon} {} · {district} {glyphs}{more}",
        playground.name
    ))
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(playground) = app.selected() else {
        draw_list(frame, app, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            playground.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "District: {}",
            playground.district.as_deref().unwrap_or("unknown")
        )),
        Line::from(format!(
            "Position: {:.5}, {:.5}",
            playground.position.lat, playground.position.lon
        )),
    ];

    if playground.is_water_playground {
        lines.push(Line::from("🌊 Water playground"));
    }
    if playground.is_accessible() {
        lines.push(Line::from("♿ Wheelchair accessible"));
    }

    for (label, key) in [
        ("Surface", SURFACE_TAG),
        ("Operator", OPERATOR_TAG),
        ("Minimum age", MIN_AGE_TAG),
        ("Maximum age", MAX_AGE_TAG),
    ] {
        if let Some(value) = playground.tag(key) {
            lines.push(Line::from(format!("{label}: {value}")));
        }
    }

    lines.push(Line::from(""));
    if playground.equipment.is_empty() {
        lines.push(Line::from("No equipment recorded."));
    } else {
        lines.push(Line::from("Equipment:"));
        lines.extend(playground.equipment.iter().map(|equipment| {
            Line::from(format!("  {} {}", equipment.glyph(), equipment.label()))
        }));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!("OpenStreetMap: {}", playground.osm_url())));
    if let Some(url) = playground
        .district
        .as_deref()
        .and_then(district_reference_url)
    {
        lines.push(Line::from(format!("Children's city map: {url}")));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Playground {} of {} (Esc/←/b to go back)",
            app.list_index + 1,
            app.view.len()
        )))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_districts(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [counts_area, side_area] = chunks else {
        return;
    };

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(*side_area);

    let side = side_chunks.as_ref();
    let [water_area, sources_area] = side else {
        return;
    };

    let mut counts = count_by_district(&app.view).into_iter().collect::<Vec<_>>();
    counts.sort_by(|(left_name, left), (right_name, right)| {
        right.cmp(left).then_with(|| left_name.cmp(right_name))
    });

    let rows = counts.into_iter().map(|(district, count)| {
        let style = if district == UNASSIGNED_DISTRICT {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        Row::new(vec![Cell::from(district), Cell::from(count.to_string())]).style(style)
    });

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(6)])
        .header(
            Row::new(vec!["District", "Count"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Playgrounds per district"),
        )
        .column_spacing(1);
    frame.render_widget(table, *counts_area);

    let water_items = KNOWN_WATER_PLAYGROUNDS
        .iter()
        .map(|known| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("🌊 {} ({})", known.name, known.district),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(format!("   {} · {}", known.hours, known.description)),
            ])
        })
        .collect::<Vec<ListItem<'_>>>();

    let water = List::new(water_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Official water playgrounds (free in summer)"),
    );
    frame.render_widget(water, *water_area);

    let sources = OFFICIAL_SOURCES
        .iter()
        .map(|source| ListItem::new(format!("→ {}: {}", source.label, source.url)))
        .collect::<Vec<ListItem<'_>>>();
    let sources =
        List::new(sources).block(Block::default().borders(Borders::ALL).title("Official sources"));
    frame.render_widget(sources, *sources_area);
}
