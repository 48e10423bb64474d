//! Hand-written site content.

use crate::effects::selector::{Categorized, ALL_CATEGORIES};
use crate::i18n::Language;

pub const OWNER_NAME: &str = "Luis A. Guisado";
pub const BRAND: &str = "Pusho.dev";
pub const RESUME_URL: &str = "/cv.pdf";
pub const IS_AVAILABLE: bool = true;
pub const PROFILE_IMAGE: &str = "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/b498d0eb-02d4-4d35-ac1f-9e2d904966f9.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub anchor: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { key: "nav.home", anchor: "home" },
    NavItem { key: "nav.about", anchor: "about" },
    NavItem { key: "nav.skills", anchor: "skills" },
    NavItem { key: "nav.projects", anchor: "projects" },
    NavItem { key: "nav.contact", anchor: "contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: "https://github.com/PushoDev" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/luis-alberto-pushodev/" },
    SocialLink { label: "Blog", href: "https://puschoft.blogspot.com/" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub key: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { key: "stats.projects", value: 42, suffix: "+" },
    Stat { key: "stats.clients", value: 50, suffix: "+" },
    Stat { key: "stats.coffee", value: 80, suffix: "+" },
    Stat { key: "stats.thesis", value: 15, suffix: "+" },
];

pub fn roles(language: Language) -> &'static [&'static str] {
    match language {
        Language::Es => &[
            "Desarrollador Full-Stack",
            "Autodidacta",
            "Innovador",
            "Solución de Problemas",
        ],
        Language::En => &["Full-Stack Developer", "Self-taught", "Innovator", "Problem Solver"],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub title_key: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        key: "frontend",
        title_key: "skills.frontend",
        skills: &[
            Skill { name: "HTML5", color: "#E34C26" },
            Skill { name: "CSS3", color: "#1572B6" },
            Skill { name: "JavaScript", color: "#F7DF1E" },
            Skill { name: "TypeScript", color: "#3178C6" },
            Skill { name: "React", color: "#61DAFB" },
            Skill { name: "Vue.js", color: "#4FC08D" },
            Skill { name: "Tailwind CSS", color: "#06B6D4" },
            Skill { name: "Flutter", color: "#02569B" },
        ],
    },
    SkillCategory {
        key: "backend",
        title_key: "skills.backend",
        skills: &[
            Skill { name: "PHP", color: "#777BB4" },
            Skill { name: "Python", color: "#3776AB" },
            Skill { name: "Laravel", color: "#FF2D20" },
            Skill { name: "WordPress", color: "#21759B" },
            Skill { name: "Django", color: "#092E20" },
            Skill { name: "FastAPI", color: "#009688" },
            Skill { name: "NestJS", color: "#E0234E" },
            Skill { name: "Dart", color: "#0175C2" },
            Skill { name: "Firebase", color: "#FFA000" },
            Skill { name: "Node.js", color: "#339933" },
        ],
    },
    SkillCategory {
        key: "tools",
        title_key: "skills.tools",
        skills: &[
            Skill { name: "Docker", color: "#2496ED" },
            Skill { name: "Kubernetes", color: "#326CE5" },
            Skill { name: "Git", color: "#F05032" },
            Skill { name: "GitHub", color: "#181717" },
            Skill { name: "GitHub Actions", color: "#2088FF" },
            Skill { name: "Postman", color: "#FF6C37" },
            Skill { name: "MySQL", color: "#4479A1" },
            Skill { name: "PostgreSQL", color: "#336791" },
            Skill { name: "MongoDB", color: "#13AA52" },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub github: &'static str,
    pub demo: &'static str,
    pub featured: bool,
}

impl Project {
    /// `#` marks a project without a public demo.
    pub fn demo_url(&self) -> Option<&'static str> {
        (self.demo != "#").then_some(self.demo)
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFilter {
    pub key: &'static str,
    pub label_key: &'static str,
}

pub static PROJECT_FILTERS: [ProjectFilter; 4] = [
    ProjectFilter { key: ALL_CATEGORIES, label_key: "projects.all" },
    ProjectFilter { key: "web", label_key: "projects.web" },
    ProjectFilter { key: "mobile", label_key: "projects.mobile" },
    ProjectFilter { key: "desktop", label_key: "projects.desktop" },
];

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "GolfitoShop",
        description: "El ecommerce más grande de Granma con sede en Mazanillo, con funcionalidades avanzadas de comercio electrónico.",
        image: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/4b2d9b98-0b1a-4cf8-8601-d60b094ac62d.jpg",
        technologies: &["WordPress", "MySQL", "QvaPay", "Stripe"],
        category: "web",
        github: "https://github.com/PushoDev",
        demo: "#",
        featured: true,
    },
    Project {
        id: 2,
        title: "Portfolio Website",
        description: "Portfolio personal con efectos visuales avanzados y diseño moderno.",
        image: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/3dee8b37-6d8d-4372-9c54-a729721947fe.jpg",
        technologies: &["Rust", "Yew", "WebAssembly", "Canvas"],
        category: "web",
        github: "https://github.com/PushoDev",
        demo: "#",
        featured: true,
    },
    Project {
        id: 3,
        title: "Task Management App",
        description: "Aplicación de gestión de tareas con colaboración en tiempo real.",
        image: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/80c2882f-1399-4bdd-82fc-1e2fb8cbe6d6.jpg",
        technologies: &["React", "Node.js", "MongoDB", "Socket.io"],
        category: "web",
        github: "https://github.com/PushoDev",
        demo: "#",
        featured: false,
    },
    Project {
        id: 4,
        title: "Mobile Weather App",
        description: "Aplicación móvil del clima con predicciones y alertas personalizadas.",
        image: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/6a2caf5a-41ed-4717-9fa4-7408a865454d.jpg",
        technologies: &["React Native", "TypeScript", "REST API"],
        category: "mobile",
        github: "https://github.com/PushoDev",
        demo: "#",
        featured: false,
    },
    Project {
        id: 5,
        title: "Desktop Inventory System",
        description: "Sistema de inventario para pequeñas empresas con reportes avanzados.",
        image: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/03dd86ba-c717-41fd-895f-d40803dc39f5.jpg",
        technologies: &["Python", "Tkinter", "SQLite", "Pandas"],
        category: "desktop",
        github: "https://github.com/PushoDev",
        demo: "#",
        featured: false,
    },
    Project {
        id: 6,
        title: "API REST FastAPI",
        description: "API robusta para microservicios con documentación automática.",
        image: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/60c30d1b-d865-4604-be63-690de7ae6ca1.jpg",
        technologies: &["FastAPI", "Python", "PostgreSQL", "Docker"],
        category: "web",
        github: "https://github.com/PushoDev",
        demo: "#",
        featured: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub avatar: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "María González",
        position: "CEO, TechStartup",
        avatar: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/c1e44d9a-b050-47d0-aa50-6ab97737c1dd.jpg",
        content: "Luis Alberto es un desarrollador excepcional. Su dedicación y habilidades técnicas son impresionantes. Entregó nuestro proyecto a tiempo y superó nuestras expectativas.",
        rating: 5,
    },
    Testimonial {
        name: "Carlos Rodríguez",
        position: "CTO, InnovaTech",
        avatar: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/e10f9c98-557b-485f-a7a5-50bcadccc9ba.jpg",
        content: "Trabajar con Pusho.dev fue una experiencia fantástica. Su enfoque en los detalles y capacidad para resolver problemas complejos es admirable.",
        rating: 5,
    },
    Testimonial {
        name: "Ana Martínez",
        position: "Product Manager, DigitalCorp",
        avatar: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/565a4a50-5997-4ad0-a471-bedc91f578ab.jpg",
        content: "La calidad del código y la arquitectura que Luis implementó en nuestro proyecto es sobresaliente. Definitivamente recomiendo sus servicios.",
        rating: 5,
    },
    Testimonial {
        name: "Roberto Silva",
        position: "Fundador, EcommerceMax",
        avatar: "https://pub-cdn.sider.ai/u/U0O9H2Y0YNR/web-coder/6882accea51c7347d0934b3b/resource/4be2acc8-b22f-4069-9922-c4b7d327c05d.jpg",
        content: "GolfitoShop es un testimonio del talento de Luis. Su visión y ejecución técnica han transformado completamente nuestro negocio online.",
        rating: 5,
    },
];

pub static APPROACH_KEYS: [&str; 4] = [
    "about.cleanCode",
    "about.performance",
    "about.userDesign",
    "about.scalableSolutions",
];

pub static CODE_LISTING: [&str; 18] = [
    "class FullStackDeveloper {",
    "  constructor(name) {",
    "    this.name = 'luis.guisado.puchotech';",
    "    this.expertise = ['React', 'Laravel', 'Python', 'Flutter'];",
    "    this.yearsOfExperience = 5;",
    "  }",
    "",
    "  solveProblems() {",
    "    return 'Clean code + Fast delivery + Innovation';",
    "  }",
    "",
    "  readyToCollaborate() {",
    "    return true;",
    "  }",
    "}",
    "",
    "const developer = new FullStackDeveloper();",
    "// Let's build something amazing together 🚀",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::selector::filter_by_category;
    use crate::i18n::Translations;
    use std::collections::BTreeSet;

    #[test]
    fn project_filters_cover_every_category() {
        for project in &PROJECTS {
            assert!(PROJECT_FILTERS.iter().any(|filter| filter.key == project.category));
        }
    }

    #[test]
    fn web_filter_keeps_source_order() {
        let titles: Vec<&str> = filter_by_category(&PROJECTS, "web")
            .iter()
            .map(|project| project.title)
            .collect();

        assert_eq!(
            titles,
            vec!["GolfitoShop", "Portfolio Website", "Task Management App", "API REST FastAPI"]
        );
        assert_eq!(filter_by_category(&PROJECTS, ALL_CATEGORIES).len(), PROJECTS.len());
    }

    #[test]
    fn project_ids_are_unique() {
        let ids: BTreeSet<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn filtering_keeps_each_project_identity() {
        let all: Vec<u32> = PROJECTS.iter().map(|project| project.id).collect();
        for filter in &PROJECT_FILTERS {
            for project in filter_by_category(&PROJECTS, filter.key) {
                assert!(all.contains(&project.id));
                assert!(std::ptr::eq(project, &PROJECTS[(project.id - 1) as usize]));
            }
        }
    }

    #[test]
    fn placeholder_demo_is_hidden() {
        assert_eq!(PROJECTS[0].demo_url(), None);
        let with_demo = Project {
            demo: "https://demo.example",
            ..PROJECTS[0]
        };
        assert_eq!(with_demo.demo_url(), Some("https://demo.example"));
    }

    #[test]
    fn every_content_key_is_translated() {
        let catalog = Translations::embedded().expect("embedded catalog parses");
        let keys = NAV_ITEMS
            .iter()
            .map(|item| item.key)
            .chain(STATS.iter().map(|stat| stat.key))
            .chain(SKILL_CATEGORIES.iter().map(|category| category.title_key))
            .chain(PROJECT_FILTERS.iter().map(|filter| filter.label_key))
            .chain(APPROACH_KEYS);

        for key in keys {
            for language in [Language::Es, Language::En] {
                assert_ne!(catalog.lookup(language, key), key, "untranslated {key}");
            }
        }
    }

    #[test]
    fn roles_exist_for_both_languages() {
        assert_eq!(roles(Language::Es).len(), roles(Language::En).len());
        assert!(!roles(Language::En).is_empty());
    }
}
