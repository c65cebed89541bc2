//! Portfolio content.
//!
//! Static configuration literals: defined once, read everywhere, never
//! mutated. Everything a visitor reads on the page lives here, except the
//! tech catalog which has its own module.

pub const DEVELOPER_NAME: &str = "Varith Pheng";
pub const DEVELOPER_MONOGRAM: &str = "VP";
pub const ROLE: &str = "SOFTWARE DEVELOPER";
pub const ROLE_TAGLINE: &str = "Full-Stack Engineer | System Architect";

/// The navbar identity prompt.
pub const PROMPT: &str = "developer@portfolio:~$";
/// The mock terminal's own prompt line.
pub const TERMINAL_PROMPT: &str = "varith@portfolio:~$";

pub const HERO_TITLE_LINES: [&str; 2] = ["Software Developer", "Based in Phnom Penh"];
pub const HERO_BLURB: &str = "3rd year university student passionate about creating clean, \
functional software solutions with modern technologies.";

pub const PHONE: &str = "+855 89 980 726";
pub const EMAIL: &str = "p.varith@gmail.com";

pub const GITHUB_URL: &str = "https://github.com/VarithPheng";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/varith-pheng-85508a2ba/";
pub const TELEGRAM_URL: &str = "https://t.me/Varith_Pheng";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: GITHUB_URL,
    },
    SocialLink {
        label: "LinkedIn",
        url: LINKEDIN_URL,
    },
    SocialLink {
        label: "Telegram",
        url: TELEGRAM_URL,
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
    /// Embedded logo, rendered as a data URI.
    pub logo_svg: &'static str,
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "American University of Phnom Penh",
        degree: "Bachelor of Science in Information Technology Management",
        years: "2022 - Present",
        logo_svg: include_str!("../assets/aupp.svg"),
    },
    EducationEntry {
        institution: "Fort Hays State University",
        degree: "Bachelor of Science in Computer Science",
        years: "2022 - Present",
        logo_svg: include_str!("../assets/fhsu.svg"),
    },
];

pub const EDUCATION_TITLE: &str = "Academic Background";
pub const EDUCATION_BLURB: &str = "Currently pursuing dual bachelor degrees in Computer Science \
and Information Technology Management.";

/// Display-only history shown in the mock terminal.
pub const TERMINAL_COMMANDS: &[&str] = &[
    "git status",
    "bun run build",
    "docker compose up -d --build",
    "yarn test --coverage",
    "bun dev --turbo",
];

/// Status bar badges.
pub const STATUS_ENV: &str = "dev-env:active";
pub const STATUS_CAFFEINE: &str = "caffeine:high";
pub const STATUS_LANGUAGE: &str = "TypeScript";

pub const COPYRIGHT: &str = "\u{00a9} 2025 Varith Pheng. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_institutions_with_embedded_logos() {
        assert_eq!(EDUCATION.len(), 2);
        for entry in EDUCATION {
            assert!(entry.logo_svg.contains("<svg"));
            assert!(!entry.degree.is_empty());
        }
    }

    #[test]
    fn social_links_are_absolute() {
        assert_eq!(SOCIAL_LINKS.len(), 3);
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{}", link.label);
        }
    }

    #[test]
    fn terminal_history_is_the_five_known_commands() {
        assert_eq!(TERMINAL_COMMANDS.len(), 5);
        assert!(TERMINAL_COMMANDS.iter().all(|cmd| !cmd.is_empty()));
    }

    #[test]
    fn prompts_end_with_a_shell_sigil() {
        assert!(PROMPT.ends_with('$'));
        assert!(TERMINAL_PROMPT.ends_with('$'));
    }
}
