//! Wizard step screens.
//!
//! One render function per step plus the placeholder shown for step indices
//! that are not implemented. Screens only read state; every edit goes
//! through [`crate::app::AppState::handle_action`].

use crate::app::AppState;
use crate::curriculum::{BranchInfo, SemesterData};
use crate::input::FieldKey;
use crate::theme::{Styles, Theme};
use crate::types::{AcademicStage, TargetGrade};
use crate::wizard::validate::{cgpa_status, mark_status, required_fields, FieldStatus};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

// ============================================================================
// Shared text
// ============================================================================

/// Key/value facts shown on the semester confirmation step
pub fn semester_overview(branch: &BranchInfo, semester: &SemesterData) -> Vec<(String, String)> {
    vec![
        ("Branch".to_string(), branch.branch.clone()),
        ("Regulation".to_string(), branch.regulation.clone()),
        ("Total Credits".to_string(), semester.total_credits.to_string()),
        ("Subjects".to_string(), semester.subjects.len().to_string()),
        (
            "Theory".to_string(),
            format!(
                "{} subjects, {} credits",
                semester.theory_subjects().count(),
                semester.theory_credits()
            ),
        ),
        (
            "Lab".to_string(),
            format!(
                "{} subjects, {} credits",
                semester.lab_subjects().count(),
                semester.lab_credits()
            ),
        ),
    ]
}

/// One display line per subject: name, code, type and credits
pub fn subject_line(subject: &crate::curriculum::Subject) -> String {
    format!(
        "{} ({})  {}  {} cr",
        subject.name, subject.code, subject.subject_type, subject.credits
    )
}

fn step_block(step: WizardStep) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(Span::styled(format!(" {} ", step.title()), Styles::title()))
}

fn subtitle(step: WizardStep) -> Paragraph<'static> {
    Paragraph::new(step.subtitle()).style(Styles::text_secondary())
}

/// Split a step area into subtitle line and body
fn split_body(block: &Block<'_>, area: Rect) -> (Rect, Rect) {
    let inner = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);
    (chunks[0], chunks[1])
}

// ============================================================================
// Step 1: Semester Confirmation
// ============================================================================

pub fn render_semester_confirm(
    f: &mut Frame,
    area: Rect,
    branch: &BranchInfo,
    semester: &SemesterData,
) {
    let block = step_block(WizardStep::SemesterConfirm);
    let (head, body) = split_body(&block, area);
    f.render_widget(block, area);
    f.render_widget(subtitle(WizardStep::SemesterConfirm), head);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(body);

    let mut info = vec![Line::from(Span::styled(semester.name.clone(), Styles::text_bold()))];
    for (label, value) in semester_overview(branch, semester) {
        info.push(Line::from(vec![
            Span::styled(format!("{:<14}", label), Styles::text_muted()),
            Span::styled(value, Styles::text()),
        ]));
    }
    f.render_widget(Paragraph::new(info), chunks[0]);

    let items: Vec<ListItem> = semester
        .subjects
        .iter()
        .map(|subject| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<48}", subject.name), Styles::text()),
                Span::styled(format!("{:<9}", subject.code), Styles::text_muted()),
                Span::styled(
                    format!("{:<7}", subject.subject_type),
                    Theme::subject_type_style(subject.subject_type),
                ),
                Span::styled(format!("{} cr", subject.credits), Styles::text_secondary()),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .title("All Subjects")
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(list, chunks[1]);
}

// ============================================================================
// Step 2: Academic Stage
// ============================================================================

pub fn render_stage_select(f: &mut Frame, area: Rect, state: &AppState) {
    let block = step_block(WizardStep::Stage);
    let (head, body) = split_body(&block, area);
    f.render_widget(block, area);
    f.render_widget(subtitle(WizardStep::Stage), head);

    let selected = state.wizard.stage();
    let mut lines = Vec::new();
    for (index, stage) in AcademicStage::iter().enumerate() {
        let marker = if selected == Some(stage) { "(*)" } else { "( )" };
        let label_style = if index == state.stage_cursor {
            Styles::selected()
        } else if selected == Some(stage) {
            Styles::focused()
        } else {
            Styles::text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, stage.label()), label_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", stage.description()),
            Styles::text_secondary(),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Your academic stage determines which marks you'll need to enter in the next steps.",
        Styles::info(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

// ============================================================================
// Step 3: Current CGPA
// ============================================================================

pub fn render_cgpa(f: &mut Frame, area: Rect, state: &AppState) {
    let block = step_block(WizardStep::CurrentCgpa);
    let (head, body) = split_body(&block, area);
    f.render_widget(block, area);
    f.render_widget(subtitle(WizardStep::CurrentCgpa), head);

    let status = if state.input.is_malformed(&FieldKey::Cgpa) {
        FieldStatus::OutOfRange
    } else {
        cgpa_status(state.wizard.current_cgpa())
    };
    let text = state.input.text(&FieldKey::Cgpa);
    let shown = if text.is_empty() { "e.g., 8.45" } else { text };

    let lines = vec![
        Line::from(Span::styled(
            "Enter your CGPA from all previous semesters (not including the current one).",
            Styles::info(),
        )),
        Line::from(""),
        Line::from(Span::styled("What is your CGPA till now?", Styles::text_bold())),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(format!("{:<8}", shown), Theme::field_style(status, true)),
            Span::styled("  (0 - 10)", Styles::text_muted()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), body);
}

// ============================================================================
// Step 4: Subject Marks
// ============================================================================

pub fn render_subject_marks(f: &mut Frame, area: Rect, state: &AppState, semester: &SemesterData) {
    let block = step_block(WizardStep::SubjectMarks);
    let (head, body) = split_body(&block, area);
    f.render_widget(block, area);

    let stage = state.wizard.stage();
    if stage == Some(AcademicStage::BeforeMid1) {
        f.render_widget(
            Paragraph::new("Enter marks obtained in assessments").style(Styles::text_secondary()),
            head,
        );
        let lines = vec![
            Line::from(Span::styled("No Marks to Enter Yet", Styles::text_bold())),
            Line::from(""),
            Line::from(Span::styled(
                "You selected \"Before Mid-1\" stage. You can proceed to the next step to set your target grades.",
                Styles::text_secondary(),
            )),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
        return;
    }
    f.render_widget(subtitle(WizardStep::SubjectMarks), head);

    let fields = required_fields(stage);
    let focused = state.focused_field(semester);
    let wanted = fields
        .iter()
        .map(|field| format!("{} ({})", field.label(), field.max()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "Stage: {}. Enter marks for: {}",
                stage.map_or("not selected", AcademicStage::label),
                wanted
            ),
            Styles::info(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Theory Subjects ({})", semester.theory_subjects().count()),
            Styles::text_bold(),
        )),
    ];

    for subject in semester.theory_subjects() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", subject.name), Styles::text()),
            Span::styled(
                format!("  {} - {} credits", subject.code, subject.credits),
                Styles::text_muted(),
            ),
        ]));

        let marks = state.wizard.marks_for(&subject.code).copied().unwrap_or_default();
        let mut row = vec![Span::raw("    ")];
        for &field in fields {
            let key = FieldKey::Mark {
                code: subject.code.clone(),
                field,
            };
            let text = state.input.text(&key);
            let shown = if text.is_empty() { "_" } else { text };
            let status = if state.input.is_malformed(&key) {
                FieldStatus::OutOfRange
            } else {
                mark_status(marks.get(field), field.max())
            };
            row.push(Span::styled(
                format!("{} / {}: ", field.label(), field.max()),
                Styles::text_secondary(),
            ));
            row.push(Span::styled(
                format!("{:<6}", shown),
                Theme::field_style(status, focused.as_ref() == Some(&key)),
            ));
            row.push(Span::raw("   "));
        }
        lines.push(Line::from(row));
    }

    let labs: Vec<_> = semester.lab_subjects().collect();
    if !labs.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Lab Subjects ({})", labs.len()),
            Styles::text_bold(),
        )));
        lines.push(Line::from(Span::styled(
            "  Labs are assumed to receive grade \"O\" by default. No marks input needed for labs.",
            Styles::success(),
        )));
        for lab in labs {
            lines.push(Line::from(Span::styled(
                format!("  - {} ({} credits)", lab.name, lab.credits),
                Styles::text_secondary(),
            )));
        }
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

// ============================================================================
// Step 5: Target Grades
// ============================================================================

pub fn render_target_grades(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    semester: &SemesterData,
) {
    let block = step_block(WizardStep::TargetGrades);
    let (head, body) = split_body(&block, area);
    f.render_widget(block, area);
    f.render_widget(subtitle(WizardStep::TargetGrades), head);

    let mut lines = vec![
        Line::from(Span::styled(
            "Pick the grade you aim for in each theory subject. Lab grades are assumed to be \"O\".",
            Styles::info(),
        )),
        Line::from(""),
    ];

    for (index, subject) in semester.theory_subjects().enumerate() {
        let grade = state.wizard.grade_for(&subject.code).unwrap_or_default();
        let name_style = if index == state.focus {
            Styles::selected()
        } else {
            Styles::text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<46}", subject.name), name_style),
            Span::styled(format!(" {:<9}", subject.code), Styles::text_muted()),
            Span::styled(
                format!("< {:^3} >", grade.to_string()),
                Style::default()
                    .fg(Theme::grade_color(grade))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Grade Information:", Styles::text_bold())));
    let mut legend = Vec::new();
    for grade in TargetGrade::iter() {
        let (low, high) = grade.percent_band();
        legend.push(Span::styled(
            format!(" {} ", grade),
            Style::default()
                .fg(Theme::grade_color(grade))
                .add_modifier(Modifier::BOLD),
        ));
        legend.push(Span::styled(
            format!("{} {}-{}   ", grade.descriptor(), low, high),
            Styles::text_secondary(),
        ));
    }
    lines.push(Line::from(legend));

    lines.push(Line::from(""));
    let mut summary = vec![Span::styled("Your targets: ", Styles::text_bold())];
    for (grade, count) in state.wizard.grade_summary(semester) {
        summary.push(Span::styled(
            format!("{} x {}  ", count, grade),
            Style::default().fg(Theme::grade_color(grade)),
        ));
    }
    lines.push(Line::from(summary));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

// ============================================================================
// Placeholder
// ============================================================================

/// Shown for step indices past the implemented steps
pub fn render_not_implemented(f: &mut Frame, area: Rect, current_step: usize) {
    let text = vec![
        Line::from(Span::styled(
            "Step not implemented yet",
            Styles::warning().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Step {} has no screen. Press Esc to go back.", current_step),
            Styles::text_muted(),
        )),
    ];
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(placeholder, area);
}
