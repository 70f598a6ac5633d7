//! Static copy for the portfolio sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Commercial,
    Music,
    Documentary,
    Corporate,
}

impl Category {
    pub const FILTERS: [Category; 5] = [
        Category::All,
        Category::Commercial,
        Category::Music,
        Category::Documentary,
        Category::Corporate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Commercial => "Commercial",
            Category::Music => "Music Videos",
            Category::Documentary => "Documentary",
            Category::Corporate => "Corporate",
        }
    }

    pub fn matches(&self, other: Category) -> bool {
        *self == Category::All || *self == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub duration: &'static str,
    pub year: &'static str,
    pub views: &'static str,
    pub description: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Brand Revolution",
        category: Category::Commercial,
        duration: "2:30",
        year: "2024",
        views: "1.2M",
        description: "A dynamic commercial showcasing the evolution of a tech brand",
    },
    Project {
        id: 2,
        title: "Midnight Dreams",
        category: Category::Music,
        duration: "3:45",
        year: "2024",
        views: "890K",
        description: "Ethereal music video with stunning visual effects",
    },
    Project {
        id: 3,
        title: "Ocean Guardians",
        category: Category::Documentary,
        duration: "45:00",
        year: "2023",
        views: "2.1M",
        description: "Environmental documentary about ocean conservation",
    },
    Project {
        id: 4,
        title: "Tech Innovations",
        category: Category::Corporate,
        duration: "1:20",
        year: "2024",
        views: "450K",
        description: "Corporate presentation showcasing innovative solutions",
    },
    Project {
        id: 5,
        title: "Urban Pulse",
        category: Category::Music,
        duration: "4:12",
        year: "2023",
        views: "1.5M",
        description: "High-energy music video shot in urban landscapes",
    },
    Project {
        id: 6,
        title: "Future Forward",
        category: Category::Commercial,
        duration: "1:45",
        year: "2024",
        views: "720K",
        description: "Futuristic commercial with cutting-edge visual effects",
    },
];

pub fn projects_in(filter: Category) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(p.category))
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static ABOUT_STATS: [Stat; 4] = [
    Stat {
        value: "150+",
        label: "Projects Completed",
    },
    Stat {
        value: "8+",
        label: "Years Experience",
    },
    Stat {
        value: "5000+",
        label: "Hours Edited",
    },
    Stat {
        value: "12",
        label: "Awards Won",
    },
];

pub static PORTFOLIO_STATS: [Stat; 3] = [
    Stat {
        value: "50+",
        label: "Projects",
    },
    Stat {
        value: "10M+",
        label: "Views",
    },
    Stat {
        value: "25+",
        label: "Awards",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub percentage: u8,
    pub tools: &'static [&'static str],
}

pub static SKILLS: [Skill; 6] = [
    Skill {
        title: "Video Editing",
        description: "Expert in Adobe Premiere Pro, Final Cut Pro, and DaVinci Resolve",
        percentage: 95,
        tools: &["Premiere Pro", "Final Cut Pro", "DaVinci Resolve"],
    },
    Skill {
        title: "Color Grading",
        description: "Professional color correction and cinematic color grading",
        percentage: 90,
        tools: &["DaVinci Resolve", "Lumetri Color", "FilmConvert"],
    },
    Skill {
        title: "Motion Graphics",
        description: "Creating stunning animations and visual effects",
        percentage: 85,
        tools: &["After Effects", "Cinema 4D", "Blender"],
    },
    Skill {
        title: "Audio Editing",
        description: "Professional audio mixing and sound design",
        percentage: 80,
        tools: &["Pro Tools", "Audition", "Logic Pro"],
    },
    Skill {
        title: "VFX & Compositing",
        description: "Advanced visual effects and compositing techniques",
        percentage: 75,
        tools: &["After Effects", "Nuke", "Fusion"],
    },
    Skill {
        title: "Storytelling",
        description: "Crafting compelling narratives through visual storytelling",
        percentage: 92,
        tools: &["Narrative Structure", "Pacing", "Emotion"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub kind: &'static str,
    pub achievements: &'static [&'static str],
}

pub static ROLES: [Role; 4] = [
    Role {
        title: "Senior Video Editor",
        company: "CreativeMotion Studios",
        location: "Los Angeles, CA",
        period: "2022 - Present",
        kind: "Full-time",
        achievements: &[
            "Led post-production for 50+ commercial projects",
            "Implemented new workflow increasing efficiency by 40%",
            "Mentored junior editors and interns",
            "Specialized in high-end color grading and motion graphics",
        ],
    },
    Role {
        title: "Video Editor & Motion Designer",
        company: "Digital Storytellers",
        location: "New York, NY",
        period: "2020 - 2022",
        kind: "Full-time",
        achievements: &[
            "Edited documentary series for streaming platforms",
            "Created motion graphics templates for the team",
            "Collaborated with directors on creative vision",
            "Managed multiple projects simultaneously",
        ],
    },
    Role {
        title: "Freelance Video Editor",
        company: "Independent",
        location: "Remote",
        period: "2018 - 2020",
        kind: "Freelance",
        achievements: &[
            "Built client base of 30+ regular customers",
            "Specialized in music videos and social media content",
            "Developed signature editing style",
            "Maintained 98% client satisfaction rate",
        ],
    },
    Role {
        title: "Junior Editor",
        company: "Metro Media House",
        location: "Chicago, IL",
        period: "2016 - 2018",
        kind: "Full-time",
        achievements: &[
            "Assisted in editing feature-length documentaries",
            "Learned advanced color correction techniques",
            "Contributed to award-winning projects",
            "Gained expertise in various editing software",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Testimonial {
    /// Initials shown in the avatar bubble.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Creative Director",
        company: "BrandVision Agency",
        rating: 5,
        text: "Working with this editor has been transformative for our brand. The attention to detail and creative vision brought our campaign to life in ways we never imagined.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Music Producer",
        company: "SoundWave Records",
        rating: 5,
        text: "The music video editing was absolutely phenomenal. Every cut, every transition perfectly matched the rhythm and emotion of our track. Truly exceptional work.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Documentary Filmmaker",
        company: "TruthTeller Films",
        rating: 5,
        text: "The editing brought such depth and emotion to our documentary. The pacing and storytelling techniques used helped us win multiple film festival awards.",
    },
    Testimonial {
        name: "David Thompson",
        role: "Marketing Manager",
        company: "TechFlow Solutions",
        rating: 5,
        text: "Professional, creative, and always delivers on time. Our corporate videos have never looked better. The ROI on our video marketing has increased by 200%.",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

pub struct ContactChannel {
    pub name: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        name: "Email",
        value: "hello@cineedit.com",
        href: "mailto:hello@cineedit.com",
    },
    ContactChannel {
        name: "Phone",
        value: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactChannel {
        name: "Location",
        value: "Los Angeles, CA",
        href: "#",
    },
];

pub static PROJECT_TIMELINE: [(&str, &str); 4] = [
    ("Initial Consultation", "Free"),
    ("Project Planning", "1-2 days"),
    ("Editing & Revisions", "3-7 days"),
    ("Final Delivery", "24 hours"),
];

pub const SHOWREEL_VIDEO_ID: &str = "0wPabaO0iu4";
pub const SHOWREEL_TITLE: &str = "My Video Editing Showreel";
pub const RESUME_URL: &str =
    "https://drive.google.com/uc?export=download&id=1KAjzDIRO544DfhEzoo5Uh5Rqw8rCDRRR";

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0&modestbranding=1")
}

/// Copyright year from the build timestamp (RFC 3339).
pub fn build_year(build_time: &str) -> &str {
    build_time.get(..4).unwrap_or(build_time)
}
