use super::super::messages::Message;
use super::super::state::{App, TIMELINE_CARD_SLOT_PX, TIMELINE_CARD_WIDTH_PX, TIMELINE_DOT_PX};
use super::{bold, heading};
use crate::content::{EXPERIENCES, Experience};
use crate::layout::{LayoutMode, Section};
use crate::motion::{ItemMotion, Progress};
use crate::theme::{self, faded};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Row, Space, column, container, row, text};
use iced::{Color, Element, Length};

/// Resting gap between a card and the timeline line.
const CARD_GAP_PX: f32 = 30.0;
/// Resting indent of a card in the single-column timeline.
const CARD_INDENT_PX: f32 = 24.0;
const TRACK_PX: f32 = 6.0;

impl App {
    pub(super) fn experience_section(&self) -> Element<'_, Message> {
        let progress = self.scenes.experience_progress;
        let motions: Vec<ItemMotion> = (0..EXPERIENCES.len())
            .map(|idx| {
                self.scenes
                    .experience_thresholds
                    .range(idx)
                    .map(|range| ItemMotion::at(idx, range, progress))
                    .unwrap_or(ItemMotion::SETTLED)
            })
            .collect();

        let timeline = match self.modes.timeline {
            LayoutMode::Desktop => desktop_timeline(progress, &motions),
            LayoutMode::Mobile => mobile_timeline(progress, &motions),
        };

        let content = column![
            heading("Experience"),
            container(timeline)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        ]
        .spacing(24)
        .padding([32, 24])
        .align_x(Horizontal::Center);

        self.pinned_scene(Section::Experience, content, Color::BLACK)
    }
}

/// Horizontal line with cards alternating above and below it.
fn desktop_timeline(progress: Progress, motions: &[ItemMotion]) -> Element<'static, Message> {
    let slot = |idx: usize, above: bool| -> Element<'static, Message> {
        let motion = motions[idx];
        let card_here = (idx % 2 == 0) == above;
        let inner: Element<'static, Message> = if !card_here {
            Space::new(Length::Fill, Length::Fill).into()
        } else if above {
            column![
                Space::with_height(Length::Fill),
                experience_card(&EXPERIENCES[idx], motion, false),
                Space::with_height(Length::Fixed(CARD_GAP_PX - motion.offset_y)),
            ]
            .align_x(Horizontal::Center)
            .into()
        } else {
            column![
                Space::with_height(Length::Fixed(CARD_GAP_PX + motion.offset_y)),
                experience_card(&EXPERIENCES[idx], motion, false),
            ]
            .align_x(Horizontal::Center)
            .into()
        };
        container(inner)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(TIMELINE_CARD_SLOT_PX))
            .align_x(Horizontal::Center)
            .into()
    };

    let upper = Row::with_children((0..motions.len()).map(|idx| slot(idx, true)));
    let lower = Row::with_children((0..motions.len()).map(|idx| slot(idx, false)));
    let dots = Row::with_children(motions.iter().map(|motion| {
        container(timeline_dot(*motion))
            .width(Length::FillPortion(1))
            .height(Length::Fixed(TIMELINE_DOT_PX))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }));

    column![upper, horizontal_track(progress), dots, lower]
        .spacing(8)
        .max_width(1280)
        .into()
}

/// Vertical line on the left with cards stacked beside it.
fn mobile_timeline(progress: Progress, motions: &[ItemMotion]) -> Element<'static, Message> {
    let items = Column::with_children(motions.iter().enumerate().map(|(idx, motion)| {
        row![
            container(timeline_dot(*motion))
                .width(Length::Fixed(TIMELINE_DOT_PX))
                .height(Length::Fixed(TIMELINE_DOT_PX))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
            Space::with_width(Length::Fixed(CARD_INDENT_PX + motion.offset_x)),
            experience_card(&EXPERIENCES[idx], *motion, true),
        ]
        .align_y(Vertical::Top)
        .into()
    }))
    .spacing(40);

    container(row![vertical_track(progress), items].spacing(8))
        .max_width(480)
        .into()
}

fn experience_card(
    experience: &'static Experience,
    motion: ItemMotion,
    compact: bool,
) -> Element<'static, Message> {
    let opacity = motion.opacity;
    let (title_size, body_size, padding, width) = if compact {
        (18.0, 14.0, 20, Length::Fill)
    } else {
        (20.0, 16.0, 28, Length::Fixed(TIMELINE_CARD_WIDTH_PX))
    };

    container(
        column![
            text(experience.role)
                .size(title_size)
                .font(bold())
                .color(faded(theme::TEXT_PRIMARY, opacity)),
            text(format!("{} | {}", experience.company, experience.duration))
                .size(body_size)
                .color(faded(theme::TEXT_MUTED, opacity)),
            text(experience.description)
                .size(body_size)
                .color(faded(theme::TEXT_SOFT, opacity)),
        ]
        .spacing(6),
    )
    .padding(padding)
    .width(width)
    .style(theme::card(opacity))
    .into()
}

fn timeline_dot(motion: ItemMotion) -> Element<'static, Message> {
    let size = (TIMELINE_DOT_PX * motion.scale).max(0.0);
    container(Space::new(Length::Fixed(size), Length::Fixed(size)))
        .style(theme::dot(faded(Color::WHITE, motion.opacity)))
        .into()
}

/// Share of the line that is filled, in thousandths.
fn filled_portions(progress: Progress) -> (u16, u16) {
    let filled = (progress.get() * 1000.0).round() as u16;
    (filled, 1000 - filled)
}

fn horizontal_track(progress: Progress) -> Element<'static, Message> {
    let (filled, rest) = filled_portions(progress);
    let mut track = Row::new().height(Length::Fixed(TRACK_PX));
    if filled > 0 {
        track = track.push(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(theme::rounded_bar(Color::WHITE)),
        );
    }
    if rest > 0 {
        track = track.push(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::FillPortion(rest))
                .height(Length::Fill)
                .style(theme::rounded_bar(theme::TRACK)),
        );
    }
    track.into()
}

fn vertical_track(progress: Progress) -> Element<'static, Message> {
    let (filled, rest) = filled_portions(progress);
    let mut track = Column::new().width(Length::Fixed(4.0)).height(Length::Fill);
    if filled > 0 {
        track = track.push(
            container(Space::new(Length::Fill, Length::Fill))
                .height(Length::FillPortion(filled))
                .width(Length::Fill)
                .style(theme::rounded_bar(Color::WHITE)),
        );
    }
    if rest > 0 {
        track = track.push(
            container(Space::new(Length::Fill, Length::Fill))
                .height(Length::FillPortion(rest))
                .width(Length::Fill)
                .style(theme::rounded_bar(theme::TRACK)),
        );
    }
    track.into()
}
