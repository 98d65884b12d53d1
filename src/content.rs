pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const LOGO_MARK: &str = "YA";
pub const NAME: &str = "Yussef Ahmed";
pub const ROLE: &str = "Front-End Developer & Bug Hunter";
pub const BIO: &str = "I'm a passionate developer with 5 years of experience in building \
    modern web applications. Specializing in React, Node.js, and cloud technologies, \
    I create scalable solutions that make a difference.";
pub const PROFILE_IMAGE_URL: &str = "https://i.imgur.com/oMUbpIZ.png";

pub const NAV_ITEMS: [&str; 4] = ["About", "Projects", "Skills", "Contact"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    X,
    Mail,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub target: &'static str,
    pub label: &'static str,
}

// The Mail target is kept verbatim from the published page even though it
// is not a mailto: URI.
pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        icon: SocialIcon::GitHub,
        target: "https://github.com/lilratt",
        label: "GitHub",
    },
    SocialLink {
        icon: SocialIcon::LinkedIn,
        target: "https://www.linkedin.com/in/yussef-ahmed-3bb294343/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: SocialIcon::X,
        target: "https://x.com/YussefHilmey",
        label: "X",
    },
    SocialLink {
        icon: SocialIcon::Mail,
        target: "yussefhilmey@outlook.com",
        label: "Email",
    },
];

pub fn nav_anchor(label: &str) -> String {
    format!("#{}", label.to_ascii_lowercase())
}

pub fn is_scrolled(offset_px: f64) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

pub fn menu_toggled(open: bool) -> bool {
    !open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_at_or_below_threshold_are_not_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(19.9));
        assert!(!is_scrolled(20.0));
    }

    #[test]
    fn offsets_above_threshold_are_scrolled() {
        assert!(is_scrolled(20.1));
        assert!(is_scrolled(500.0));
    }

    #[test]
    fn menu_open_after_odd_activation_counts() {
        let mut open = false;

        for activation in 1..=6 {
            open = menu_toggled(open);
            assert_eq!(open, activation % 2 == 1);
        }
    }

    #[test]
    fn nav_anchors_are_lowercased_labels() {
        assert_eq!(nav_anchor("Projects"), "#projects");

        for label in NAV_ITEMS {
            let anchor = nav_anchor(label);
            assert_eq!(anchor, format!("#{}", label.to_ascii_lowercase()));
        }
    }

    #[test]
    fn nav_items_keep_display_order() {
        assert_eq!(NAV_ITEMS, ["About", "Projects", "Skills", "Contact"]);
    }

    #[test]
    fn social_links_keep_published_targets() {
        let targets: Vec<&str> = SOCIAL_LINKS.iter().map(|link| link.target).collect();

        assert_eq!(
            targets,
            [
                "https://github.com/lilratt",
                "https://www.linkedin.com/in/yussef-ahmed-3bb294343/",
                "https://x.com/YussefHilmey",
                "yussefhilmey@outlook.com",
            ]
        );
    }

    #[test]
    fn social_links_pair_icons_with_labels() {
        let labels: Vec<&str> = SOCIAL_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["GitHub", "LinkedIn", "X", "Email"]);

        assert_eq!(SOCIAL_LINKS[0].icon, SocialIcon::GitHub);
        assert_eq!(SOCIAL_LINKS[1].icon, SocialIcon::LinkedIn);
        assert_eq!(SOCIAL_LINKS[2].icon, SocialIcon::X);
        assert_eq!(SOCIAL_LINKS[3].icon, SocialIcon::Mail);
    }

    #[test]
    fn mail_target_stays_a_bare_address() {
        let mail = SOCIAL_LINKS
            .iter()
            .find(|link| link.icon == SocialIcon::Mail)
            .expect("mail entry present");

        assert!(!mail.target.starts_with("mailto:"));
        assert!(!mail.target.starts_with("http"));
    }
}
