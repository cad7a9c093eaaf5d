// Built-in page content. Order within every table is display order.

use super::icon::Icon;
use super::types::{Education, Highlight, Palette, Portfolio, Profile, Project, SkillCategory};

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: PROFILE,
    highlights: HIGHLIGHTS,
    skills: SKILLS,
    projects: PROJECTS,
    education: EDUCATION,
};

const PROFILE: Profile = Profile {
    first_name: "Vijayadurga",
    last_name: "Pothallanka",
    brand: "Vijayadurga",
    tagline: "Computer Science Student & Aspiring Developer passionate about creating innovative solutions through technology",
    photo_path: "/static/portfolio.jpeg",
    photo_alt: "Vijayadurga Pothallanka",
    email: "pvijayadurga2003@gmail.com",
    phone: "9652481106",
    linkedin_url: "https://www.linkedin.com/in/vijayadurga",
    github_url: "https://github.com/Pvijayadurga",
    about: &[
        "I am adaptable, attentive, and eager to acquire new skills. I value combining different knowledge areas and am looking for an exciting role in a company that's always moving forward.",
        "I want to use my creativity and ability to come up with new ideas. I'm ready to work hard, be reliable, motivate others, and contribute to the company's success.",
    ],
    contact_headline: "Let's Connect",
    contact_blurb: "Ready to work hard, be reliable, and contribute to your company's success",
    certification: "SQL (Basic) Certified - HackerRank",
    footer: "© 2025 Vijayadurga Pothallanka. Built with Rust and passion for innovation.",
};

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Leadership Experience",
        body: "UG Admissions Coordinator at IIIT Nuzvid, managing teams and overseeing admission processes.",
        icon: Icon::Users,
        palette: Palette::Blue,
    },
    Highlight {
        title: "NCC Training",
        body: "Completed NCC training with focus on discipline, leadership, and national service (2020-2023).",
        icon: Icon::Award,
        palette: Palette::Green,
    },
];

const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        key: "programming",
        label: "Programming",
        icon: Icon::Code,
        palette: Palette::Blue,
        skills: &["Python", "SQL"],
        visible_limit: None,
    },
    SkillCategory {
        key: "web",
        label: "Web Technologies",
        icon: Icon::ExternalLink,
        palette: Palette::Green,
        skills: &["HTML", "CSS", "React.js"],
        visible_limit: None,
    },
    SkillCategory {
        key: "design",
        label: "Design & Analytics",
        icon: Icon::Palette,
        palette: Palette::Purple,
        skills: &["UI/UX Design", "Tableau"],
        visible_limit: None,
    },
    SkillCategory {
        key: "tools",
        label: "Tools",
        icon: Icon::Database,
        palette: Palette::Orange,
        skills: &[
            "Git",
            "GitHub",
            "MS Excel",
            "MS Word",
            "PowerPoint",
            "Visual Studio Code",
            "Figma",
        ],
        visible_limit: Some(4),
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Food Court Website",
        period: "May 2024 – June 2024",
        kind: "UI/UX Design and Front-End Project",
        technologies: &["Figma", "HTML", "CSS", "React.js"],
        description: &[
            "Designed user-friendly and responsive UI prototypes for a food ordering system using Figma",
            "Collaborated in front-end development using React.js and implemented the designed UI",
            "Developed admin panel screens for menu management and order tracking",
        ],
        accent: "from-orange-400 to-red-500",
    },
    Project {
        title: "Student Performance Data Visualization",
        period: "Oct 2024 – Nov 2024",
        kind: "Data Analytics Project",
        technologies: &["Tableau", "Excel"],
        description: &[
            "Cleaned and prepared student performance datasets using Excel for analysis",
            "Built interactive dashboards and visualizations in Tableau",
            "Enabled academic insights through charts and visual themes",
        ],
        accent: "from-blue-400 to-purple-500",
    },
    Project {
        title: "Smart Crop Advisor Front-End",
        period: "Feb 2024 – April 2024",
        kind: "Agri-Tech Web Application",
        technologies: &["HTML", "CSS", "React.js"],
        description: &[
            "Designed and developed the front-end for a Smart Crop Advisor tool using React.js",
            "Created user input interface to collect state and season selections",
            "Displayed top 5 high-yield crops dynamically with an intuitive and responsive UI",
        ],
        accent: "from-green-400 to-emerald-500",
    },
];

const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Technology in Computer Science and Engineering",
        institution: "Rajiv Gandhi University of Knowledge Technologies (IIIT Nuzvid)",
        location: "Nuzvid, Andhra Pradesh",
        period: "Aug 2021 – May 2025",
    },
    Education {
        degree: "Pre-University Course (Maths, Physics, Chemistry)",
        institution: "Rajiv Gandhi University of Knowledge Technologies (PUC Campus)",
        location: "Nuzvid, Andhra Pradesh",
        period: "Aug 2019 – May 2021",
    },
    Education {
        degree: "Secondary School Certificate (SSC)",
        institution: "MZPHS Velangi",
        location: "Kakinada, Andhra Pradesh",
        period: "June 2018 – May 2019",
    },
];
