//! Gallery Demo - the stock gallery carousel in a terminal
//!
//! Demonstrates:
//! - Building carousel markup in a `MemoryDom`
//! - Mounting the `gallery` preset on a `Page`
//! - Feeding crossterm mouse and resize events through `TerminalInput`
//! - Driving autoplay and transitions from wall-clock time
//!
//! Drag the strip, click `<` / `>` or a dot. Arrow keys also navigate.
//! Press `q` or Esc to quit.
//!
//! Run with: cargo run --example gallery

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use spark_carousel::{
    presets, translate_x_css, CarouselId, Dom, ElementId, MemoryDom, Page, TerminalInput,
};

// =============================================================================
// LAYOUT
// =============================================================================

const MARGIN: u16 = 4;
const STRIP_ROW: u16 = 3;
const STRIP_HEIGHT: u16 = 3;
const CONTROLS_ROW: u16 = 8;

const FRAME: Duration = Duration::from_millis(16);

const PHOTOS: [&str; 5] = ["Harbour", "Lighthouse", "Dunes", "Old Town", "Night Market"];

struct Gallery {
    id: CarouselId,
    track: ElementId,
    prev: ElementId,
    next: ElementId,
}

/// Screen positions derived from the terminal size.
struct Layout {
    columns: u16,
    dots_start: u16,
}

impl Layout {
    fn new(columns: u16, dots: usize) -> Self {
        let dots_width = (dots as u16).saturating_mul(2);
        Self {
            columns,
            dots_start: columns.saturating_sub(dots_width) / 2,
        }
    }

    fn track_columns(&self) -> u16 {
        self.columns.saturating_sub(MARGIN * 2)
    }

    fn hit_test(
        &self,
        page: &Page<MemoryDom>,
        gallery: &Gallery,
        column: u16,
        row: u16,
    ) -> Option<ElementId> {
        let carousel = page.carousel(gallery.id)?;
        if (STRIP_ROW..STRIP_ROW + STRIP_HEIGHT).contains(&row)
            && (MARGIN..MARGIN + self.track_columns()).contains(&column)
        {
            return Some(gallery.track);
        }
        if row != CONTROLS_ROW {
            return None;
        }
        if column < MARGIN {
            return Some(gallery.prev);
        }
        if column >= self.columns.saturating_sub(MARGIN) {
            return Some(gallery.next);
        }
        let offset = column.checked_sub(self.dots_start)?;
        let dots = carousel.indicators().dots();
        if offset % 2 == 0 {
            dots.get((offset / 2) as usize).copied()
        } else {
            None
        }
    }
}

// =============================================================================
// SETUP
// =============================================================================

fn build_page(input: &TerminalInput, columns: u16) -> Option<(Page<MemoryDom>, Gallery)> {
    let mut dom = MemoryDom::new(input.viewport_px(columns));
    let body = dom.document_root();
    let root = dom.build(body, "section.gallery-carousel");
    let track = dom.build(root, "div.gallery-track");
    dom.set_width(track, input.column_to_px(columns.saturating_sub(MARGIN * 2)));
    for title in PHOTOS {
        let slide = dom.build(track, "div.gallery-slide");
        dom.set_text(slide, title);
    }
    let prev = dom.build(root, "button#galleryPrev");
    let next = dom.build(root, "button#galleryNext");
    dom.build(root, "div#galleryControls");

    let mut page = Page::new(dom);
    let id = page.mount(&presets::gallery())?;
    Some((page, Gallery { id, track, prev, next }))
}

// =============================================================================
// RENDER
// =============================================================================

fn render(
    out: &mut Stdout,
    page: &Page<MemoryDom>,
    gallery: &Gallery,
    input: &TerminalInput,
    layout: &Layout,
) -> io::Result<()> {
    let Some(carousel) = page.carousel(gallery.id) else {
        return Ok(());
    };
    let dom = page.dom();
    let translate = dom.translate_x(gallery.track);
    let step = carousel.step_width(dom);
    let slides = carousel.slides();

    queue!(out, Clear(ClearType::All), MoveTo(MARGIN, 1))?;
    queue!(
        out,
        Print(format!(
            "Gallery  {}/{}  ({} per view{})",
            carousel.active_indicator().map(|i| i + 1).unwrap_or(0),
            carousel.real_count(),
            carousel.slides_per_view(),
            if carousel.is_autoplaying() { ", autoplay" } else { "" }
        ))
    )?;

    // Each track column shows whichever slide covers its pixel
    for row in 0..STRIP_HEIGHT {
        let mut line = String::new();
        for col in 0..layout.track_columns() {
            let px = input.column_to_px(col) - translate;
            let slot = (px / step).floor();
            let within = px - slot * step;
            let first_col = within < input.column_to_px(1);
            let ch = if slot < 0.0 || slot as usize >= slides.len() {
                ' '
            } else if first_col {
                '│'
            } else if row == STRIP_HEIGHT / 2 {
                let text = dom.text(slides[slot as usize]);
                let text_col = (within / input.column_to_px(1)) as usize;
                text.chars()
                    .nth(text_col.saturating_sub(2))
                    .filter(|_| text_col >= 2)
                    .unwrap_or(' ')
            } else {
                ' '
            };
            line.push(ch);
        }
        queue!(out, MoveTo(MARGIN, STRIP_ROW + row), Print(line))?;
    }

    queue!(out, MoveTo(1, CONTROLS_ROW), Print("<"))?;
    queue!(out, MoveTo(layout.columns.saturating_sub(2), CONTROLS_ROW), Print(">"))?;
    for (i, dot) in carousel.indicators().dots().iter().enumerate() {
        let glyph = if dom.has_class(*dot, "active") { "●" } else { "○" };
        queue!(out, MoveTo(layout.dots_start + i as u16 * 2, CONTROLS_ROW), Print(glyph))?;
    }
    queue!(
        out,
        MoveTo(MARGIN, CONTROLS_ROW + 2),
        Print(format!(
            "transform: {}  transition: {}",
            translate_x_css(translate),
            dom.transition(gallery.track).css()
        ))
    )?;
    queue!(
        out,
        MoveTo(MARGIN, CONTROLS_ROW + 3),
        Print("drag, click or ←/→ · q to quit")
    )?;
    out.flush()
}

// =============================================================================
// MAIN LOOP
// =============================================================================

fn main() -> io::Result<()> {
    let mut input = TerminalInput::default();
    let (columns, _) = terminal::size()?;
    let Some((mut page, gallery)) = build_page(&input, columns) else {
        eprintln!("gallery markup incomplete");
        return Ok(());
    };
    let dots = page.carousel(gallery.id).map(|c| c.indicators().len()).unwrap_or(0);
    let mut layout = Layout::new(columns, dots);

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let mut last = Instant::now();
    let result = loop {
        if let Err(e) = render(&mut out, &page, &gallery, &input, &layout) {
            break Err(e);
        }

        // Sleep until the next carousel timer, redrawing at least every frame
        let wait = page
            .timers()
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(page.now()))
            .unwrap_or(FRAME)
            .min(FRAME);
        match event::poll(wait) {
            Ok(true) => {}
            Ok(false) => {
                let now = Instant::now();
                page.advance(now - last);
                last = now;
                continue;
            }
            Err(e) => break Err(e),
        }
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                KeyCode::Left => page.prev(gallery.id),
                KeyCode::Right => page.next(gallery.id),
                _ => {}
            }
            continue;
        }

        if let Event::Resize(columns, _) = event {
            layout = Layout::new(columns, dots);
            let width = input.column_to_px(layout.track_columns());
            page.dom_mut().set_width(gallery.track, width);
        }

        let events = input.translate(&event, |column, row| {
            layout.hit_test(&page, &gallery, column, row)
        });
        for ui_event in events {
            page.dispatch(ui_event);
        }

        let now = Instant::now();
        page.advance(now - last);
        last = now;
    };

    execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
