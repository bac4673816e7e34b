//! Everything the page says. Rendered verbatim by the view layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Text(&'static str),
    Strong(&'static str),
    Break,
}

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub heading: &'static str,
    pub sub: Option<&'static str>,
    pub meta: Option<&'static str>,
    pub body: &'static [Span],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LinkedIn,
    GitHub,
    Medium,
    Calendar,
    Mail,
    Phone,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::GitHub => "devicon-github-plain",
            Icon::Medium => "devicon-medium-plain",
            Icon::Calendar => "extra-calendar",
            Icon::Mail => "extra-email",
            Icon::Phone => "extra-phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub style: LinkStyle,
}

impl Link {
    /// Web links leave the page in a new tab; `mailto:` and `tel:` do not.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub years: &'static str,
    pub role: &'static str,
    pub employer: &'static str,
    pub employer_href: &'static str,
    pub fan_line: &'static str,
    pub fan_button: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Teshan Jayakody",
    initials: "TJ",
    greeting: "Hi, I’m Teshan.",
    tagline: "At the intersection of product, UX, and engineering — I help ideas become clear, usable, and real.",
    years: "2+ years",
    role: "Business Analyst",
    employer: "Xeynergy™",
    employer_href: "https://www.xeynergy.com/",
    fan_line: "Proud Madridista — ",
    fan_button: "¡Hala Madrid Y Nada Más!",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

#[derive(Debug, Clone, Copy)]
pub struct SectionRef {
    pub kind: SectionKind,
    pub id: &'static str,
    pub nav: &'static str,
    /// Heading above the section. The hero carries its own greeting instead.
    pub title: Option<&'static str>,
}

pub const SECTIONS: &[SectionRef] = &[
    SectionRef {
        kind: SectionKind::About,
        id: "about",
        nav: "Me",
        title: None,
    },
    SectionRef {
        kind: SectionKind::Skills,
        id: "skills",
        nav: "Skills",
        title: Some("Skills"),
    },
    SectionRef {
        kind: SectionKind::Experience,
        id: "experience",
        nav: "Experience",
        title: Some("Experience"),
    },
    SectionRef {
        kind: SectionKind::Education,
        id: "education",
        nav: "Education",
        title: Some("Education"),
    },
    SectionRef {
        kind: SectionKind::Projects,
        id: "projects",
        nav: "Projects",
        title: Some("Projects"),
    },
    SectionRef {
        kind: SectionKind::Contact,
        id: "contact",
        nav: "Contact",
        title: Some("Let’s Connect!"),
    },
];

pub const SKILLS: &[Entry] = &[
    Entry {
        heading: "Business Analysis",
        sub: Some("Requirements • Research • Analyze"),
        meta: None,
        body: &[Span::Text(
            "Identify business needs and turn them into clear, practical solutions. Work closely with stakeholders to gather and understand requirements, analyze existing processes, and define structured acceptance criteria. Conduct product and market research to stay aligned with industry trends and business goals.",
        )],
    },
    Entry {
        heading: "Wireframing & Prototyping",
        sub: Some("Clarity • Design • Usability Testing"),
        meta: None,
        body: &[Span::Text(
            "Create wireframes to design draft versions of products using tools like Figma. Work closely with UX designers to refine layouts and user flows. Develop interactive prototypes and conduct usability testing to validate design decisions. Use AI-powered tools to accelerate prototyping and improve design efficiency.",
        )],
    },
    Entry {
        heading: "Project Management",
        sub: Some("Planning • Coordination • Delivery"),
        meta: None,
        body: &[Span::Text(
            "Lead cross-functional teams by facilitating Scrum ceremonies and ensuring smooth collaboration. Support team members in resolving challenges and maintaining momentum. Communicate effectively with stakeholders and represent the team in discussions. Ensure delivery aligns with planned roadmaps and project goals.",
        )],
    },
    Entry {
        heading: "Technical Writing",
        sub: Some("Documentation • Specifications • API Docs"),
        meta: None,
        body: &[Span::Text(
            "Create clear and structured product documentation for end users, including detailed user flows and feature explanations. Develop SRS, and BRD documents to support project clarity and alignment. Produce technical documentation such as API documentations. Build and maintain documentation sites from scratch to ensure easy access to product knowledge.",
        )],
    },
    Entry {
        heading: "Engineering Foundation",
        sub: Some("Development • Database • Clean Code"),
        meta: None,
        body: &[Span::Text(
            "Strong background in frontend and backend development with solid expertise in SQL and DBMS. This engineering foundation enables effective collaboration with technical teams and ensures business solutions are technically sound and scalable.",
        )],
    },
];

pub const EXPERIENCE: &[Entry] = &[
    Entry {
        heading: "Xeynergy™",
        sub: Some("Business Analyst / Design & Documentation Specialist"),
        meta: Some("2025 Oct – Present"),
        body: &[Span::Text(
            "Supporting a North American logistics product across Business Analysis, Project Management, and Technical Writing. Managing sprint execution, maintaining structured documentation, reviewing test cases, conducting testing sessions, leveraging AI for task automation, and researching on tools & techniques to optimize development workflows.",
        )],
    },
    Entry {
        heading: "Rootcode",
        sub: Some("Intern Business Analyst"),
        meta: Some("2024 Sept – 2025 Sept"),
        body: &[
            Span::Text(
                "Contributed to client projects in the Healthcare and Analytics domains within the North American region, working in an Agile environment. Supported requirement mapping, stakeholder coordination, documentation, and facilitated SCRUM ceremonies. Collaborated with cross-functional teams to deliver features on time and improve productivity.",
            ),
            Span::Break,
            Span::Break,
            Span::Text(
                "Played the Business Analyst & Product Owner roles in Skapp that won Awards at NBQSA 2025 and was also recognized at the Asia Pacific ICT Awards 2025. Contributed to requirement analysis, roadmap definition, market research, competitor analysis, and close collaboration with UX teams on wireframing and usability testing. Leveraged tools such as Jira and GitHub Projects for effective project tracking and visibility.",
            ),
        ],
    },
    Entry {
        heading: "LB Finance PLC",
        sub: Some("Associate Software Engineer"),
        meta: Some("2024 Mar – 2024 Sept"),
        body: &[Span::Text(
            "Worked as a Full-Stack Developer on Eclipse, the enterprise core system supporting business operations. Contributed to the Deposit and General Ledger modules using Angular and ASP.NET, while designing and optimizing SQL Server procedures and queries. Collaborated within an Agile environment, conducted tech talks, and supported intern engineers through knowledge-sharing sessions.",
        )],
    },
    Entry {
        heading: "LB Finance PLC",
        sub: Some("Intern Software Engineer"),
        meta: Some("2023 Aug – 2024 Feb"),
        body: &[
            Span::Text("The very first experience in a "),
            Span::Strong("tech role!"),
            Span::Text(
                " Worked as an Intern Full-Stack Developer on Eclipse, the core enterprise system supporting key business operations. Developed frontend components using Angular and backend services with ASP.NET, while designing SQL Server procedures and functions for efficient data handling. Applied Clean Code and TDD practices within an Agile environment and collaborated with cross-functional teams to deliver business-aligned features.",
            ),
        ],
    },
];

pub const EDUCATION: &[Entry] = &[
    Entry {
        heading: "BSc in Information Technology (Hons) – Specializing in SWE",
        sub: Some("Sri Lanka Institute of Information Technology (SLIIT)"),
        meta: Some("2021 Jul – 2025 Jul"),
        body: &[
            Span::Text("Graduated with "),
            Span::Strong("Second Class Honours"),
            Span::Text(
                " from a four-year Software Engineering degree program focused on designing and developing software systems. Gained strong knowledge in programming, databases, and core software engineering principles, supported by hands-on experience through academic and industry-based projects.",
            ),
        ],
    },
    Entry {
        heading: "Advanced Level & Ordinary Level",
        sub: Some("St. Peter's College, Colombo 04"),
        meta: Some("2006 – 2019"),
        body: &[Span::Text(
            "Completed primary and secondary education from Grade 1 to Grade 13. Pursued Advanced Level studies in the Physical Science stream. Actively participated in extracurricular activities, contributing to teamwork, and overall personal development.",
        )],
    },
];

pub const PROJECTS: &[Entry] = &[
    Entry {
        heading: "Skapp",
        sub: Some("Business Analyst & Product Owner • Rootcode"),
        meta: Some("NBQSA 2025"),
        body: &[
            Span::Text("Award winner at "),
            Span::Strong("NBQSA 2025"),
            Span::Text(
                " and recognized at the Asia Pacific ICT Awards 2025. Owned requirement analysis, roadmap definition, market and competitor research, and worked with UX on wireframes and usability testing.",
            ),
        ],
    },
    Entry {
        heading: "Eclipse Core System",
        sub: Some("Full-Stack Developer • LB Finance PLC"),
        meta: Some("Angular • ASP.NET • SQL Server"),
        body: &[Span::Text(
            "Features for the Deposit and General Ledger modules of the enterprise core system, with SQL Server procedures and queries tuned for efficient data handling.",
        )],
    },
];

pub const CONTACT_BLURB: &str = "Whether you need a Business Analyst to translate business needs into clear solutions, support product strategy, or collaborate on delivering meaningful outcomes, I’m always open to new opportunities.";

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/teshanjayakody/",
        icon: Icon::LinkedIn,
        style: LinkStyle::Outline,
    },
    Link {
        label: "GitHub",
        href: "https://github.com/teshanj7",
        icon: Icon::GitHub,
        style: LinkStyle::Outline,
    },
    Link {
        label: "Medium",
        href: "https://medium.com/@teshanj",
        icon: Icon::Medium,
        style: LinkStyle::Outline,
    },
];

pub const CONTACT_LINKS: &[Link] = &[
    Link {
        label: "Book a Meeting",
        href: "https://calendly.com/YOUR_USERNAME/YOUR_EVENT",
        icon: Icon::Calendar,
        style: LinkStyle::Primary,
    },
    Link {
        label: "Email me",
        href: "mailto:teshan@jayakodylk.com",
        icon: Icon::Mail,
        style: LinkStyle::Outline,
    },
    Link {
        label: "Connect on LinkedIn",
        href: "https://www.linkedin.com/in/teshanjayakody/",
        icon: Icon::LinkedIn,
        style: LinkStyle::Outline,
    },
];
