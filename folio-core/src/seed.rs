//! Seed sources: where the catalog's fixed project list comes from.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::{CatalogError, Result};
use crate::record::{parse_date, Category, ProjectRecord, ProjectStatus};

pub trait SeedSource {
    /// Name used in log lines and load errors.
    fn name(&self) -> String;

    fn load(&self) -> Result<Vec<ProjectRecord>>;
}

/// The portfolio's own projects, compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

impl SeedSource for BuiltinSeed {
    fn name(&self) -> String {
        "builtin".to_string()
    }

    fn load(&self) -> Result<Vec<ProjectRecord>> {
        BUILTIN_PROJECTS
            .iter()
            .map(|spec| spec.to_record())
            .collect()
    }
}

/// A JSON array of project objects on disk.
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for FileSeed {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<ProjectRecord>> {
        let data = fs::read_to_string(&self.path)
            .map_err(|err| CatalogError::load(self.name(), err.to_string()))?;
        serde_json::from_str(&data).map_err(|err| CatalogError::load(self.name(), err.to_string()))
    }
}

/// A fixed list handed over by the host, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSeed(pub Vec<ProjectRecord>);

impl SeedSource for StaticSeed {
    fn name(&self) -> String {
        "static".to_string()
    }

    fn load(&self) -> Result<Vec<ProjectRecord>> {
        Ok(self.0.clone())
    }
}

struct SeedSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    technologies: &'static [&'static str],
    live_url: &'static str,
    thumbnail: &'static str,
    featured: bool,
    github: &'static str,
    date: &'static str,
}

impl SeedSpec {
    fn to_record(&self) -> Result<ProjectRecord> {
        let date: DateTime<Utc> = parse_date(self.date).ok_or_else(|| {
            CatalogError::load("builtin", format!("bad date '{}' on {}", self.date, self.id))
        })?;
        Ok(ProjectRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            technologies: self.technologies.iter().map(|t| t.to_string()).collect(),
            live_url: self.live_url.to_string(),
            github_url: Some(self.github.to_string()),
            thumbnail: Some(self.thumbnail.to_string()),
            featured: self.featured,
            date,
            status: ProjectStatus::Completed,
        })
    }
}

const BUILTIN_PROJECTS: &[SeedSpec] = &[
    SeedSpec {
        id: "business-website",
        title: "Business Website",
        description: "Professional business website with modern design, responsive layout, contact forms, and SEO optimization for corporate clients.",
        category: Category::Web,
        technologies: &["HTML5", "CSS3", "JavaScript", "Bootstrap", "SEO"],
        live_url: "https://kainatjaved5.github.io/business/",
        thumbnail: "business we.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/business",
        date: "2024-01-28",
    },
    SeedSpec {
        id: "analytical-dashboard",
        title: "Analytical Dashboard",
        description: "Advanced analytics dashboard with real-time data visualization, interactive charts, and comprehensive reporting features for business intelligence.",
        category: Category::Web,
        technologies: &["React", "D3.js", "Chart.js", "WebSocket", "Node.js"],
        live_url: "https://kainatjaved5.github.io/Analytical-Dashboard/",
        thumbnail: "analytical dash.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/Analytical-Dashboard",
        date: "2024-01-25",
    },
    SeedSpec {
        id: "task-management",
        title: "Task Management System",
        description: "Comprehensive task management platform with drag-and-drop functionality, team collaboration, deadline tracking, and progress monitoring.",
        category: Category::Web,
        technologies: &["Vue.js", "Express", "MongoDB", "Socket.io", "JWT"],
        live_url: "https://kainatjaved5.github.io/Task-Management/",
        thumbnail: "task_management.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/Task-Management",
        date: "2024-01-22",
    },
    SeedSpec {
        id: "e-commers",
        title: "E-Commerce Platform",
        description: "Modern e-commerce solution with product catalog, shopping cart, payment processing, user authentication, and admin dashboard.",
        category: Category::Web,
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Redux"],
        live_url: "https://kainatjaved5.github.io/E-Commers/",
        thumbnail: "E-commers.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/E-Commers",
        date: "2024-01-20",
    },
    SeedSpec {
        id: "self-defence",
        title: "Self Defence Academy",
        description: "Martial arts academy website with class schedules, instructor profiles, training programs, and online registration system.",
        category: Category::Web,
        technologies: &["React", "Firebase", "Material-UI", "Calendar"],
        live_url: "https://kainatjaved5.github.io/selef-defance/",
        thumbnail: "selef defance.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/selef-defance",
        date: "2024-01-15",
    },
    SeedSpec {
        id: "social-media",
        title: "Social Media Platform",
        description: "Full-featured social media application with user profiles, posts, comments, likes, real-time messaging, and notifications.",
        category: Category::Web,
        technologies: &["MERN Stack", "Socket.io", "Cloudinary", "JWT"],
        live_url: "https://kainatjaved5.github.io/social-media/",
        thumbnail: "social.png",
        featured: false,
        github: "https://github.com/Kainatjaved5/social-media",
        date: "2024-01-12",
    },
    SeedSpec {
        id: "portfolio-showcase",
        title: "Portfolio Showcase",
        description: "Creative portfolio website with project galleries, skill showcases, testimonials, and contact forms for freelancers.",
        category: Category::Design,
        technologies: &["React", "Framer Motion", "TailwindCSS", "EmailJS"],
        live_url: "https://kainatjaved5.github.io/portfolio/",
        thumbnail: "kj portfolio.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/portfolio",
        date: "2024-01-10",
    },
    SeedSpec {
        id: "kjportfolio-main",
        title: "Kainat Javed Portfolio",
        description: "Professional portfolio website with modern design, project showcases, responsive layout, and smooth animations.",
        category: Category::Web,
        technologies: &["HTML", "CSS", "JavaScript", "TailwindCSS", "GitHub Pages"],
        live_url: "https://kainatjaved5.github.io/kjportfolio/",
        thumbnail: "kj portfolio.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/kjportfolio",
        date: "2024-01-30",
    },
    SeedSpec {
        id: "kainat-javed-artist",
        title: "Kainat Javed Artist Portfolio",
        description: "Creative artist portfolio showcasing artwork, exhibitions, and artistic journey with elegant design and immersive gallery experience.",
        category: Category::Design,
        technologies: &["HTML5", "CSS3", "JavaScript", "Responsive Design", "Gallery"],
        live_url: "https://kainatjaved5.github.io/kainat-javed-artist/",
        thumbnail: "sdtqui.png",
        featured: true,
        github: "https://github.com/Kainatjaved5/kainat-javed-artist",
        date: "2024-01-31",
    },
];
