use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{QuickstayError, Result};
use crate::models::{ProfileSection, UserProfile};

/// Shown when the profile image fails to load
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

const DEFAULT_NAME: &str = "Julian Weng";
const DEFAULT_IMAGE: &str =
    "https://julianweng.com/static/de0938520fe51f46529d519ce402f246/d1234/jwsuit.webp";
const DEFAULT_LOCATION: &str = "Philadelphia, PA";
const DEFAULT_STAY_DAYS: i64 = 7;

/// Short US-style date used across the views, e.g. `6/1/2026`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Starting profile for a session that begins on `today`
pub fn default_profile(today: NaiveDate) -> UserProfile {
    UserProfile {
        name: DEFAULT_NAME.to_string(),
        image: DEFAULT_IMAGE.to_string(),
        budget: (1000, 1100),
        dates: (today, today + Duration::days(DEFAULT_STAY_DAYS)),
        location: DEFAULT_LOCATION.to_string(),
        notification_enabled: true,
    }
}

/// Profile row that opens the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditingField {
    Budget,
    Dates,
    Location,
    Image,
}

impl EditingField {
    pub fn name(&self) -> &'static str {
        match self {
            EditingField::Budget => "Budget",
            EditingField::Dates => "Dates",
            EditingField::Location => "Location",
            EditingField::Image => "Image",
        }
    }

    /// Title of the edit dialog
    pub fn dialog_title(&self) -> String {
        format!("Edit {}", self.name())
    }
}

/// Profile with a one-field-at-a-time edit dialog
///
/// Opening a field copies the profile into a draft. Edits touch only the
/// draft; `save` validates and commits it, `cancel` throws it away.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    profile: UserProfile,
    draft: Option<(EditingField, UserProfile)>,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            draft: None,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn editing(&self) -> Option<EditingField> {
        self.draft.as_ref().map(|(field, _)| *field)
    }

    pub fn draft(&self) -> Option<&UserProfile> {
        self.draft.as_ref().map(|(_, draft)| draft)
    }

    /// Open the dialog for `field`, replacing any dialog already open
    pub fn open(&mut self, field: EditingField) {
        tracing::debug!("Editing profile field {}", field.name());
        self.draft = Some((field, self.profile.clone()));
    }

    pub fn cancel(&mut self) {
        if let Some((field, _)) = self.draft.take() {
            tracing::debug!("Discarded edit of {}", field.name());
        }
    }

    fn draft_for(&mut self, expected: EditingField) -> Result<&mut UserProfile> {
        match &mut self.draft {
            Some((field, draft)) if *field == expected => Ok(draft),
            Some((field, _)) => Err(QuickstayError::InvalidField(format!(
                "{} is not editable while editing {}",
                expected.name(),
                field.name()
            ))),
            None => Err(QuickstayError::NotEditing),
        }
    }

    pub fn set_budget_min(&mut self, min: u32) -> Result<()> {
        self.draft_for(EditingField::Budget)?.budget.0 = min;
        Ok(())
    }

    pub fn set_budget_max(&mut self, max: u32) -> Result<()> {
        self.draft_for(EditingField::Budget)?.budget.1 = max;
        Ok(())
    }

    pub fn set_start_date(&mut self, start: NaiveDate) -> Result<()> {
        self.draft_for(EditingField::Dates)?.dates.0 = start;
        Ok(())
    }

    pub fn set_end_date(&mut self, end: NaiveDate) -> Result<()> {
        self.draft_for(EditingField::Dates)?.dates.1 = end;
        Ok(())
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> Result<()> {
        self.draft_for(EditingField::Location)?.location = location.into();
        Ok(())
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> Result<()> {
        self.draft_for(EditingField::Image)?.image = url.into();
        Ok(())
    }

    /// Validate the open draft and make it the profile
    pub fn save(&mut self) -> Result<&UserProfile> {
        let (field, draft) = self.draft.as_ref().ok_or(QuickstayError::NotEditing)?;
        validate_draft(*field, draft)?;

        if let Some((field, draft)) = self.draft.take() {
            tracing::info!("Saved profile field {}", field.name());
            self.profile = draft;
        }
        Ok(&self.profile)
    }

    /// Flip notifications in place; no dialog involved
    pub fn toggle_notifications(&mut self) -> bool {
        self.profile.notification_enabled = !self.profile.notification_enabled;
        self.profile.notification_enabled
    }

    /// Image to render, falling back to the placeholder after a load failure
    pub fn image_src(&self, load_failed: bool) -> &str {
        if load_failed || self.profile.image.is_empty() {
            PLACEHOLDER_IMAGE_URL
        } else {
            &self.profile.image
        }
    }

    pub fn sections(&self) -> Vec<ProfileSection> {
        let p = &self.profile;
        vec![
            ProfileSection {
                title: "Budget",
                value: format!("${} - ${}/month", p.budget.0, p.budget.1),
                editable: true,
            },
            ProfileSection {
                title: "Dates",
                value: format!("{} - {}", display_date(p.dates.0), display_date(p.dates.1)),
                editable: true,
            },
            ProfileSection {
                title: "Location",
                value: p.location.clone(),
                editable: true,
            },
            ProfileSection {
                title: "Notifications",
                value: if p.notification_enabled { "Enabled" } else { "Disabled" }.to_string(),
                editable: false,
            },
        ]
    }
}

fn validate_draft(field: EditingField, draft: &UserProfile) -> Result<()> {
    match field {
        EditingField::Budget => {
            let (min, max) = draft.budget;
            if min > max {
                return Err(QuickstayError::InvalidBudget { min, max });
            }
        }
        EditingField::Dates => {
            let (start, end) = draft.dates;
            if end < start {
                return Err(QuickstayError::InvalidDates { start, end });
            }
        }
        EditingField::Image => {
            if draft.image.trim().is_empty() {
                return Err(QuickstayError::InvalidField("image URL is empty".to_string()));
            }
        }
        EditingField::Location => {}
    }
    Ok(())
}
