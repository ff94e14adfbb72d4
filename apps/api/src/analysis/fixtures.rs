//! Fixture tables backing the mock analysis generator.
//!
//! A persona bundles the identity fields that move together (name, email,
//! phone, links, summary). Every other pool is drawn independently and the
//! pools are not the same size, so a software-engineer persona can end up
//! with marketing skills. That mismatch is inherited from the source data
//! and left as-is.

pub struct Persona {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    /// Stored without scheme; the generator prefixes `https://`.
    pub linkedin: &'static str,
    pub portfolio: &'static str,
    pub summary: &'static str,
}

pub const PERSONAS: &[Persona] = &[
    Persona {
        name: "John Smith",
        email: "john.smith@email.com",
        phone: "+1 (555) 123-4567",
        linkedin: "linkedin.com/in/johnsmith",
        portfolio: "johnsmith.dev",
        summary: "Experienced software engineer with 5+ years in full-stack development, specializing in React and Node.js applications.",
    },
    Persona {
        name: "Sarah Johnson",
        email: "sarah.j@email.com",
        phone: "+1 (555) 987-6543",
        linkedin: "linkedin.com/in/sarahjohnson",
        portfolio: "sarahdesigns.com",
        summary: "Creative UX/UI designer with expertise in user-centered design and modern web technologies.",
    },
    Persona {
        name: "Michael Chen",
        email: "mchen@email.com",
        phone: "+1 (555) 456-7890",
        linkedin: "linkedin.com/in/michaelchen",
        portfolio: "mchen-portfolio.com",
        summary: "Data scientist with strong background in machine learning and statistical analysis.",
    },
    Persona {
        name: "Emily Davis",
        email: "emily.davis@email.com",
        phone: "+1 (555) 321-0987",
        linkedin: "linkedin.com/in/emilydavis",
        portfolio: "emilydavis.io",
        summary: "Product manager with proven track record in agile methodologies and cross-functional team leadership.",
    },
    Persona {
        name: "Alex Rodriguez",
        email: "alex.r@email.com",
        phone: "+1 (555) 654-3210",
        linkedin: "linkedin.com/in/alexrodriguez",
        portfolio: "alexdev.com",
        summary: "Marketing specialist focused on digital campaigns and brand strategy development.",
    },
];

pub struct WorkExperienceFixture {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static [&'static str],
}

pub const WORK_EXPERIENCE_VARIANTS: &[&[WorkExperienceFixture]] = &[
    &[
        WorkExperienceFixture {
            role: "Senior Software Engineer",
            company: "Tech Corp",
            duration: "2021 - Present",
            description: &[
                "Led development of microservices architecture",
                "Mentored junior developers",
                "Improved system performance by 40%",
            ],
        },
        WorkExperienceFixture {
            role: "Software Engineer",
            company: "StartupXYZ",
            duration: "2019 - 2021",
            description: &[
                "Built responsive web applications",
                "Collaborated with design team",
                "Implemented CI/CD pipelines",
            ],
        },
    ],
    &[WorkExperienceFixture {
        role: "UX Designer",
        company: "Design Studio",
        duration: "2022 - Present",
        description: &[
            "Created user-centered design solutions",
            "Conducted user research and testing",
            "Improved conversion rates by 25%",
        ],
    }],
];

pub struct EducationFixture {
    pub degree: &'static str,
    pub institution: &'static str,
    pub graduation_year: &'static str,
}

pub const EDUCATION_VARIANTS: &[&[EducationFixture]] = &[
    &[
        EducationFixture {
            degree: "Bachelor of Computer Science",
            institution: "Tech University",
            graduation_year: "2019",
        },
        EducationFixture {
            degree: "Master of Software Engineering",
            institution: "Advanced Tech Institute",
            graduation_year: "2021",
        },
    ],
    &[EducationFixture {
        degree: "Bachelor of Design",
        institution: "Art Institute",
        graduation_year: "2020",
    }],
];

pub const TECHNICAL_SKILLS_POOL: &[&[&str]] = &[
    &["JavaScript", "React", "Node.js", "Python", "AWS", "PostgreSQL", "Docker"],
    &["Figma", "Adobe Creative Suite", "HTML/CSS", "JavaScript", "Prototyping", "User Research"],
    &["Python", "R", "TensorFlow", "SQL", "Tableau", "Machine Learning", "Statistics"],
    &["Jira", "Confluence", "Agile", "Scrum", "Product Strategy", "Data Analysis"],
    &["Google Analytics", "SEO", "Content Marketing", "Social Media", "A/B Testing"],
];

pub const SOFT_SKILLS_POOL: &[&[&str]] = &[
    &["Leadership", "Problem Solving", "Communication", "Team Collaboration"],
    &["Creativity", "Critical Thinking", "Attention to Detail", "Time Management"],
    &["Analytical Thinking", "Communication", "Project Management", "Adaptability"],
];

pub struct ProjectFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const PROJECT_VARIANTS: &[&[ProjectFixture]] = &[
    &[
        ProjectFixture {
            name: "E-commerce Platform",
            description: "Full-stack web application with payment integration",
            technologies: &["React", "Node.js", "Stripe"],
        },
        ProjectFixture {
            name: "Task Management App",
            description: "Real-time collaborative task manager",
            technologies: &["Vue.js", "Firebase", "WebSocket"],
        },
    ],
    &[ProjectFixture {
        name: "Mobile Banking App",
        description: "User interface design for financial services",
        technologies: &["Figma", "Principle", "User Testing"],
    }],
];

pub const CERTIFICATIONS_POOL: &[&[&str]] = &[
    &["AWS Certified Developer", "Google Cloud Professional", "Scrum Master Certified"],
    &["Adobe Certified Expert", "UX Design Certificate", "Google Analytics Certified"],
    &["TensorFlow Developer Certificate", "AWS Machine Learning Specialty"],
];

pub const IMPROVEMENT_AREAS_POOL: &[&str] = &[
    "Consider adding more specific metrics and quantifiable achievements to work experience. Include relevant certifications and expand on leadership experience.",
    "Resume could benefit from more detailed project descriptions and technical implementations. Consider adding open-source contributions.",
    "Add more industry-specific keywords and consider reorganizing sections for better visual hierarchy. Include portfolio links.",
    "Strengthen the professional summary with more specific achievements. Add relevant technical skills section.",
    "Include more quantifiable results from marketing campaigns. Add relevant digital marketing certifications.",
];

pub const UPSKILL_SUGGESTIONS_POOL: &[&[&str]] = &[
    &["Cloud Architecture", "DevOps", "System Design", "GraphQL", "Kubernetes"],
    &["Advanced React", "TypeScript", "Mobile Development", "API Design", "Testing"],
    &["Design Systems", "Motion Design", "Accessibility", "Frontend Development", "Product Strategy"],
    &["Data Analysis", "Business Intelligence", "Advanced Excel", "SQL", "Tableau"],
    &["Marketing Automation", "Data Analytics", "Content Strategy", "SEO Optimization", "Social Media Management"],
];
