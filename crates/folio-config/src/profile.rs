//! Portfolio content
//!
//! Everything the portfolio displays lives here so that a `[profile]` table in
//! `.folio.toml` can replace any part of it. Missing tables keep the shipped
//! content.

use serde::{Deserialize, Serialize};

/// The whole portfolio
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Profile {
    /// Name typed out on the splash screen
    pub name: String,
    /// Name shown in the hero headline and the footer
    pub display_name: String,
    pub greeting: String,
    pub tagline: String,
    pub about: AboutContent,
    pub technologies: Vec<Technology>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AboutContent {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub counters: Vec<Counter>,
}

/// A number counted up from zero on the About section
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Counter {
    pub label: String,
    pub end: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Technology {
    pub name: String,
    /// Badge colour as HSL
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

/// Project category, used by the project filter
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    #[serde(rename = "MERN")]
    Mern,
    Flutter,
    #[serde(rename = "AI")]
    Ai,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub category: ProjectCategory,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub year: String,
    /// Path or URL of the certificate scan
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactContent {
    pub heading: String,
    pub blurb: String,
    pub socials: Vec<Social>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Social {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FooterContent {
    pub brand: String,
    pub links: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Dhananjaya".to_string(),
            display_name: "Your Name".to_string(),
            greeting: "Welcome to my portfolio".to_string(),
            tagline: "Full Stack Developer | MCA Student | MERN Stack Developer".to_string(),
            about: AboutContent::default(),
            technologies: default_technologies(),
            projects: default_projects(),
            certificates: default_certificates(),
            contact: ContactContent::default(),
            footer: FooterContent::default(),
        }
    }
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "Full Stack Developer & MCA Student".to_string(),
            paragraphs: vec![
                "I'm a passionate full-stack developer currently pursuing my Master of Computer \
                 Applications (MCA). I specialize in the MERN stack and love building interactive \
                 web applications with modern technologies."
                    .to_string(),
                "My goal is to create impactful digital experiences that combine beautiful design \
                 with robust functionality. I'm constantly learning and exploring new technologies \
                 to expand my skill set."
                    .to_string(),
            ],
            counters: vec![
                Counter::new("Projects", 15),
                Counter::new("Technologies", 10),
                Counter::new("Certificates", 8),
            ],
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            heading: "Let's work together".to_string(),
            blurb: "I'm always open to new opportunities and collaborations. Feel free to reach \
                    out if you have a project in mind or just want to say hello!"
                .to_string(),
            socials: vec![
                Social::new("GitHub", "https://github.com/dhananjaya0013"),
                Social::new("LinkedIn", "https://linkedin.com"),
                Social::new("Email", "mailto:dhananjayanchan32@gmail.com"),
            ],
        }
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            brand: "Portfolio".to_string(),
            links: ["Home", "About", "Projects", "Contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Counter {
    pub fn new(label: &str, end: u32) -> Self {
        Self {
            label: label.to_string(),
            end,
        }
    }
}

impl Social {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

impl Technology {
    fn hsl(name: &str, hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            name: name.to_string(),
            hue,
            saturation,
            lightness,
        }
    }

    /// Badge colour converted to RGB
    pub fn rgb(&self) -> (u8, u8, u8) {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

impl Project {
    fn new(title: &str, category: ProjectCategory, description: &str, tech: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            category,
            description: description.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            live: None,
            github: None,
        }
    }
}

impl Certificate {
    fn new(title: &str, issuer: &str, year: &str) -> Self {
        Self {
            title: title.to_string(),
            issuer: issuer.to_string(),
            year: year.to_string(),
            image: None,
            alt: None,
        }
    }

    /// Text describing the certificate image, falling back to the title
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.title)
    }
}

fn default_technologies() -> Vec<Technology> {
    vec![
        Technology::hsl("HTML5", 12, 77, 52),
        Technology::hsl("CSS3", 205, 82, 51),
        Technology::hsl("JavaScript", 48, 89, 50),
        Technology::hsl("React", 193, 95, 68),
        Technology::hsl("Node.js", 120, 47, 45),
        Technology::hsl("MongoDB", 120, 41, 41),
        Technology::hsl("Express", 0, 0, 70),
        Technology::hsl("Flutter", 207, 90, 61),
        Technology::hsl("Git", 10, 75, 47),
        Technology::hsl("Three.js", 0, 0, 100),
    ]
}

fn default_projects() -> Vec<Project> {
    use ProjectCategory::*;
    vec![
        Project::new(
            "E-Commerce Platform",
            Mern,
            "Full-stack e-commerce platform with payment integration, user authentication, and admin dashboard.",
            &["React", "Node.js", "MongoDB", "Express", "Stripe"],
        ),
        Project::new(
            "Task Manager App",
            Mern,
            "Collaborative task management tool with real-time updates and team features.",
            &["React", "Node.js", "Socket.io", "MongoDB"],
        ),
        Project::new(
            "Weather App",
            Flutter,
            "Cross-platform weather application with beautiful UI and location-based forecasts.",
            &["Flutter", "Dart", "OpenWeather API"],
        ),
        Project::new(
            "AI Chatbot",
            Ai,
            "Intelligent chatbot powered by machine learning for customer support automation.",
            &["Python", "TensorFlow", "React", "Flask"],
        ),
        Project::new(
            "Portfolio 3D",
            Mern,
            "Interactive 3D portfolio website built with Three.js and React.",
            &["React", "Three.js", "Framer Motion"],
        ),
        Project::new(
            "Fitness Tracker",
            Flutter,
            "Mobile fitness tracking app with workout plans and progress analytics.",
            &["Flutter", "Firebase", "Dart"],
        ),
    ]
}

fn default_certificates() -> Vec<Certificate> {
    vec![
        Certificate::new(
            "MongoDB - The Complete Developer's Guide 2024",
            "Udemy",
            "2024",
        ),
        Certificate::new("Research Methodology", "Coursera", "2025"),
        Certificate::new("Flutter Development Bootcamp", "Udemy", "2024"),
        Certificate::new("Mobile App Development", "Udemy", "2024"),
    ]
}

/// Convert HSL (degrees, percent, percent) to RGB
pub fn hsl_to_rgb(hue: u16, saturation: u8, lightness: u8) -> (u8, u8, u8) {
    let h = f64::from(hue % 360) / 60.0;
    let s = f64::from(saturation.min(100)) / 100.0;
    let l = f64::from(lightness.min(100)) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}
