use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Projects selectable from the board's sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Project {
    /// "Web Application"
    #[serde(rename = "Web Application")]
    WebApplication,
    /// "Mobile Application"
    #[serde(rename = "Mobile Application")]
    MobileApplication,
    /// "Marketing Campaign"
    #[serde(rename = "Marketing Campaign")]
    MarketingCampaign,
}

impl Project {
    /// Every project, in sidebar order.
    pub const ALL: [Project; 3] = [
        Project::WebApplication,
        Project::MobileApplication,
        Project::MarketingCampaign,
    ];

    /// The project button's label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Project::WebApplication => "Web Application",
            Project::MobileApplication => "Mobile Application",
            Project::MarketingCampaign => "Marketing Campaign",
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Project {
    type Err = String;

    /// Accepts the button label or its kebab-case form (`web-application`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', " ");
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown project '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_kebab_case() {
        assert_eq!("Web Application".parse::<Project>().unwrap(), Project::WebApplication);
        assert_eq!("mobile-application".parse::<Project>().unwrap(), Project::MobileApplication);
        assert_eq!(" marketing campaign ".parse::<Project>().unwrap(), Project::MarketingCampaign);
        assert!("Desktop Application".parse::<Project>().is_err());
    }

    #[test]
    fn display_matches_label() {
        for project in Project::ALL {
            assert_eq!(project.to_string(), project.label());
        }
    }
}
