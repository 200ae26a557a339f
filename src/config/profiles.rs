//! Installation profiles and menu-choice parsing.
use std::fmt;
use std::str::FromStr;

use crate::error::InstallError;

/// One of the three preset installation bundles.
///
/// # Examples
///
/// ```
/// use prompt_hooks_installer::config::profiles::Profile;
///
/// assert_eq!(Profile::from_choice("3").unwrap(), Profile::Full);
/// assert!(Profile::from_choice("4").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Base hook set with the standard settings file.
    Standard,
    /// Enhanced settings plus slash commands.
    Enhanced,
    /// Enhanced plus framework install, reference download and integrations.
    Full,
}

/// Which of the two settings source files a profile installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsVariant {
    /// `settings/settings.standard.json`
    Standard,
    /// `settings/settings.enhanced.json`
    Enhanced,
}

impl Profile {
    /// All profiles in menu order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Enhanced, Self::Full];

    /// Parse a raw menu choice (`1`, `2` or `3`).
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::InvalidChoice`] for anything else.
    pub fn from_choice(input: &str) -> Result<Self, InstallError> {
        match input.trim() {
            "1" => Ok(Self::Standard),
            "2" => Ok(Self::Enhanced),
            "3" => Ok(Self::Full),
            other => Err(InstallError::InvalidChoice(other.to_string())),
        }
    }

    /// Menu key for this profile.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Standard => '1',
            Self::Enhanced => '2',
            Self::Full => '3',
        }
    }

    /// Lower-case profile name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Enhanced => "enhanced",
            Self::Full => "full",
        }
    }

    /// One-line description shown in the menu.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Standard => "Standard: prompt hooks with the base settings",
            Self::Enhanced => "Enhanced: enhanced settings and slash commands",
            Self::Full => {
                "Full: enhanced, plus framework install, reference docs and MCP integrations"
            }
        }
    }

    /// Settings source file this profile installs.
    #[must_use]
    pub const fn settings_variant(self) -> SettingsVariant {
        match self {
            Self::Standard => SettingsVariant::Standard,
            Self::Enhanced | Self::Full => SettingsVariant::Enhanced,
        }
    }

    /// Whether slash-command files are installed.
    #[must_use]
    pub const fn installs_commands(self) -> bool {
        matches!(self, Self::Enhanced | Self::Full)
    }

    /// Whether the extended integration steps run.
    #[must_use]
    pub const fn extended_integration(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = InstallError;

    /// Accepts the menu keys as well as the profile names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| trimmed.eq_ignore_ascii_case(p.name()))
            .map_or_else(|| Self::from_choice(trimmed), Ok)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_map_to_profiles() {
        assert_eq!(Profile::from_choice("1").unwrap(), Profile::Standard);
        assert_eq!(Profile::from_choice("2").unwrap(), Profile::Enhanced);
        assert_eq!(Profile::from_choice("3").unwrap(), Profile::Full);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Profile::from_choice(" 2\n").unwrap(), Profile::Enhanced);
    }

    #[test]
    fn invalid_choices_are_rejected() {
        for input in ["", "0", "4", "12", "full", "one", "1 2"] {
            let err = Profile::from_choice(input).unwrap_err();
            assert!(
                matches!(err, InstallError::InvalidChoice(_)),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_str_accepts_names_and_keys() {
        assert_eq!("full".parse::<Profile>().unwrap(), Profile::Full);
        assert_eq!("Enhanced".parse::<Profile>().unwrap(), Profile::Enhanced);
        assert_eq!("1".parse::<Profile>().unwrap(), Profile::Standard);
        assert!("premium".parse::<Profile>().is_err());
    }

    #[test]
    fn key_round_trips_through_from_choice() {
        for profile in Profile::ALL {
            assert_eq!(
                Profile::from_choice(&profile.key().to_string()).unwrap(),
                profile
            );
        }
    }

    #[test]
    fn settings_variant_per_profile() {
        assert_eq!(Profile::Standard.settings_variant(), SettingsVariant::Standard);
        assert_eq!(Profile::Enhanced.settings_variant(), SettingsVariant::Enhanced);
        assert_eq!(Profile::Full.settings_variant(), SettingsVariant::Enhanced);
    }

    #[test]
    fn only_full_runs_extended_integration() {
        assert!(!Profile::Standard.extended_integration());
        assert!(!Profile::Enhanced.extended_integration());
        assert!(Profile::Full.extended_integration());
    }

    #[test]
    fn commands_installed_for_enhanced_and_full() {
        assert!(!Profile::Standard.installs_commands());
        assert!(Profile::Enhanced.installs_commands());
        assert!(Profile::Full.installs_commands());
    }
}
