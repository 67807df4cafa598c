//! Static portfolio content, compiled into the binary.

pub const OWNER_NAME: &str = "Muheeb";
pub const TAGLINE: &str = "Full Stack Web Developer";
pub const HERO_BLURB: &str = "I build fast, friendly web applications with the MERN stack, \
    from the first wireframe to the production deploy.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I started out writing C, learning how memory, pointers and plain loops really behave.",
    "C++ and data structures came next, which is where problem solving turned into a habit.",
    "These days I build full-stack applications end to end: React on the front, \
     Node and Express behind it, MongoDB underneath.",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Programming Foundations",
        company: "C Language",
        duration: "2024",
        description: "Started programming with C, building core logic and understanding memory fundamentals.",
    },
    Experience {
        role: "Data Structures & Algorithms",
        company: "C++",
        duration: "2025",
        description: "Strengthened problem-solving skills by implementing DSA concepts in C++.",
    },
    Experience {
        role: "Full Stack Web Developer",
        company: "Self-Learning & Projects",
        duration: "2025 – Present",
        description: "Transitioned into full-stack development, building real-world applications using the MERN stack.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub link: &'static str,
    /// Scene background as `#RRGGBB`.
    pub background: &'static str,
    pub desktop_image: &'static str,
    pub mobile_image: &'static str,
}

impl Project {
    pub fn image(&self, mobile: bool) -> &'static str {
        if mobile {
            self.mobile_image
        } else {
            self.desktop_image
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Tribeo",
        link: "https://tribeo-k12k.onrender.com/",
        background: "#3F5F9A",
        desktop_image: "assets/desktopimg1.png",
        mobile_image: "assets/mobileimg1.jpeg",
    },
    Project {
        title: "Atmos",
        link: "https://atmos.muheeb.dev/",
        background: "#0E0E0E",
        desktop_image: "assets/desktopimg2.png",
        mobile_image: "assets/mobileimg2.jpeg",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &["C", "C++", "JavaScript", "HTML", "CSS"],
    },
    SkillGroup {
        title: "Frontend",
        skills: &["React", "Tailwind CSS", "Framer Motion", "Vite"],
    },
    SkillGroup {
        title: "Backend",
        skills: &["Node.js", "Express", "MongoDB", "REST APIs"],
    },
    SkillGroup {
        title: "Tooling",
        skills: &["Git", "GitHub", "Postman", "VS Code"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Delivered exactly what we asked for and explained every trade-off along the way.",
        author: "Aisha K.",
        role: "Startup founder",
    },
    Testimonial {
        quote: "Clean code, quick turnarounds and a real eye for how the interface should feel.",
        author: "Daniel R.",
        role: "Product designer",
    },
    Testimonial {
        quote: "Picked up our stack in days and shipped the dashboard ahead of schedule.",
        author: "Sara M.",
        role: "Engineering lead",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/",
    },
    SocialLink {
        label: "Website",
        url: "https://muheeb.dev/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenes_have_items() {
        assert!(!EXPERIENCES.is_empty());
        assert!(!PROJECTS.is_empty());
    }

    #[test]
    fn outbound_links_are_https() {
        let links = PROJECTS
            .iter()
            .map(|p| p.link)
            .chain(SOCIAL_LINKS.iter().map(|s| s.url));
        for link in links {
            assert!(link.starts_with("https://"), "{link}");
        }
    }

    #[test]
    fn project_image_follows_layout() {
        let project = PROJECTS[0];
        assert_eq!(project.image(true), project.mobile_image);
        assert_eq!(project.image(false), project.desktop_image);
    }
}
