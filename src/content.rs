//! Compiled-in copy for the page sections.

pub const OWNER: &str = "Omar Gad";
pub const CONTACT_EMAIL: &str = "omargad7324@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/omargad2211";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/omar-gad-abdelwahhab/";
pub const PROFILE_IMAGE: &str = "/images/profile.svg";
pub const FAVICON: &str = "/favicon.svg";

pub const HERO_TITLE: &str = "Hi, I'm Omar — Crafting Modern & Responsive Web Experiences.";

pub const TECHNOLOGIES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "HTML5",
    "CSS/SCSS",
    "Tailwind CSS",
    "React.js",
    "Next.js",
    "Redux Toolkit",
    "Redux Toolkit Query",
    "React hook form",
    "Git/GitHub",
    "React Native",
    "Material UI",
    "unit test",
    "Agile Methodology",
    "UI/UX Principles",
];

/// Line icons drawn inline as 24x24 stroked SVG paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Layout,
    Smartphone,
    Code,
    Zap,
    Tooth,
    Book,
    Graduate,
    Laptop,
    Phone,
    Github,
    Linkedin,
    Mail,
    Link,
    Send,
    Loader,
    ArrowRight,
}

impl Icon {
    /// `d` attributes of the icon's paths.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Tooth => &[
                "M7 3C4.5 3 3 5 3 7.5c0 2 1 3.5 1.5 5.5S5 17 6 20c.5 1.5 2 1.5 2.5 0L10 15c.5-1.5 3.5-1.5 4 0l1.5 5c.5 1.5 2 1.5 2.5 0 1-3 1-5.5 1.5-7.5S21 9.5 21 7.5C21 5 19.5 3 17 3c-2 0-3 1-5 1S9 3 7 3z",
            ],
            Icon::Book => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::Graduate => &[
                "M22 10v6",
                "M2 10l10-5 10 5-10 5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            Icon::Laptop => &[
                "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16",
            ],
            Icon::Phone => &[
                "M8 2h8a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M11 5h2",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::Link => &[
                "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71",
                "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71",
            ],
            Icon::Send => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
            Icon::Loader => &["M21 12a9 9 0 1 1-6.219-8.56"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        }
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        anchor: "home",
    },
    NavLink {
        label: "Services",
        anchor: "services",
    },
    NavLink {
        label: "Journey",
        anchor: "journey",
    },
    NavLink {
        label: "Projects",
        anchor: "projects",
    },
    NavLink {
        label: "Contact",
        anchor: "contact",
    },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Frontend Development",
        description: "Building responsive and interactive user interfaces with React and modern web technologies.",
        icon: Icon::Layout,
    },
    Service {
        title: "Responsive Design",
        description: "Creating seamless experiences across all devices with responsive design principles.",
        icon: Icon::Smartphone,
    },
    Service {
        title: "Clean Code",
        description: "Writing maintainable, scalable, and efficient code following best practices.",
        icon: Icon::Code,
    },
    Service {
        title: "Performance Optimization",
        description: "Optimizing applications for speed, accessibility, and search engine visibility.",
        icon: Icon::Zap,
    },
];

pub struct JourneyStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const JOURNEY: &[JourneyStep] = &[
    JourneyStep {
        id: 1,
        title: "Dentistry",
        description: "Started as a Dentist, exploring the field of healthcare.",
        icon: Icon::Tooth,
    },
    JourneyStep {
        id: 2,
        title: "Self-Learning",
        description: "Self-taught programming through online resources.",
        icon: Icon::Book,
    },
    JourneyStep {
        id: 3,
        title: "ITI",
        description: "Joined the ITI program to enhance my tech skills.",
        icon: Icon::Graduate,
    },
    JourneyStep {
        id: 4,
        title: "Depo Web Company",
        description: "Started my career as a Front-End Developer.",
        icon: Icon::Laptop,
    },
    JourneyStep {
        id: 5,
        title: "Depx Company",
        description: "Joined as React native Developer.",
        icon: Icon::Phone,
    },
];

/// `None` when the project has no public page of that kind.
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub links: ProjectLinks,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "CineScope",
        description: "Movies website",
        image: "/images/cinescope.svg",
        tags: &[
            "React",
            "Redux Toolkit Query",
            "Tailwind CSS",
            "framer motion",
            "swiper.js",
        ],
        links: ProjectLinks {
            github: Some("https://github.com/omargad2211/Cinescope.git"),
            live: Some("https://cinescope-ten.vercel.app/"),
        },
    },
    Project {
        title: "MetroMingle",
        description: "Blogging website",
        image: "/images/metro.svg",
        tags: &["React", "Firebase", "Tailwind CSS"],
        links: ProjectLinks {
            github: Some("https://github.com/omargad2211/MetroMingle"),
            live: Some("https://metro-mingle.vercel.app/"),
        },
    },
    Project {
        title: "Depo Web Company Website",
        description: "Official company website showcasing services and portfolio.",
        image: "/images/depo.svg",
        tags: &[
            "React",
            "django",
            "tailwind css",
            "framer motion",
            "swiper.js",
            "i18next",
            "react hook form",
        ],
        links: ProjectLinks {
            github: None,
            live: Some("https://depowebeg.com/"),
        },
    },
    Project {
        title: "Prime Care",
        description: "Pharmacy E-commerce website",
        image: "/images/prime.svg",
        tags: &[
            "React",
            "Firebase",
            "tailwind css",
            "react flowbite",
            "redux toolkit",
        ],
        links: ProjectLinks {
            github: Some("https://github.com/prime-care/prime-care"),
            live: None,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_ICONS: &[Icon] = &[
        Icon::Layout,
        Icon::Smartphone,
        Icon::Code,
        Icon::Zap,
        Icon::Tooth,
        Icon::Book,
        Icon::Graduate,
        Icon::Laptop,
        Icon::Phone,
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::Link,
        Icon::Send,
        Icon::Loader,
        Icon::ArrowRight,
    ];

    #[test]
    fn test_titles_unique() {
        let services: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(services.len(), SERVICES.len());
        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(projects.len(), PROJECTS.len());
    }

    #[test]
    fn test_journey_ids_sequential() {
        for (i, step) in JOURNEY.iter().enumerate() {
            assert_eq!(step.id as usize, i + 1);
        }
    }

    #[test]
    fn test_projects_well_formed() {
        for project in PROJECTS {
            assert_eq!(project.title, project.title.trim());
            assert!(!project.tags.is_empty());
            assert!(project.image.starts_with('/'));
            assert!(project.links.github.is_some() || project.links.live.is_some());
            let tags: HashSet<_> = project.tags.iter().collect();
            assert_eq!(tags.len(), project.tags.len());
        }
    }

    #[test]
    fn test_every_icon_has_paths() {
        for icon in ALL_ICONS {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?} has no paths");
            for d in paths {
                assert!(d.starts_with(['M', 'm']), "{icon:?} path should start with a move");
            }
        }
    }

    #[test]
    fn test_images_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let images = PROJECTS
            .iter()
            .map(|p| p.image)
            .chain([PROFILE_IMAGE, FAVICON]);
        for image in images {
            let file = public.join(image.trim_start_matches('/'));
            assert!(file.is_file(), "{image} is missing from public/");
        }
    }

    #[test]
    fn test_nav_links_cover_sections() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, ["home", "services", "journey", "projects", "contact"]);
    }
}
