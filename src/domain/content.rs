// 內建的作品集資料
use crate::domain::model::{
    Education, ExperienceEntry, PortfolioContent, Profile, Project, SkillCategories, SkillRatings,
};
use crate::utils::error::Result;

const SKILL_RATINGS: &[(&str, f64)] = &[
    ("Python", 0.95),
    ("TensorFlow", 0.9),
    ("PyTorch", 0.85),
    ("Scikit-learn", 0.9),
    ("NLP", 0.85),
    ("Computer Vision", 0.8),
    ("MLOps", 0.75),
    ("Deep Learning", 0.85),
    ("Data Engineering", 0.7),
    ("Cloud Deployment", 0.8),
];

const SKILLS: &[(&str, &[&str])] = &[
    ("Languages", &["Python", "R", "SQL", "C++", "JavaScript"]),
    ("ML Frameworks", &["TensorFlow", "PyTorch", "Keras", "Scikit-learn"]),
    ("Big Data", &["Spark", "Hadoop", "Kafka", "Airflow"]),
    ("Cloud", &["AWS SageMaker", "Google Cloud AI", "Azure ML"]),
    ("MLOps", &["Docker", "Kubernetes", "MLflow", "DVC", "GitHub Actions"]),
    ("Visualization", &["Matplotlib", "Seaborn", "Plotly", "Tableau"]),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PortfolioContent {
    /// The hardcoded ML engineer portfolio.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            profile: builtin_profile(),
            skills: builtin_skills(),
            ratings: SkillRatings::try_from_pairs(SKILL_RATINGS.iter().copied())?,
            projects: builtin_projects(),
            experience: builtin_experience(),
        })
    }
}

fn builtin_profile() -> Profile {
    Profile {
        name: "Alex Johnson".to_string(),
        title: "Machine Learning Engineer".to_string(),
        photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=250&h=250&fit=crop"
            .to_string(),
        bio: "Experienced Machine Learning Engineer with 5+ years of experience developing and \
              deploying ML models at scale. Specializing in NLP, computer vision, and \
              recommendation systems with a strong background in Python, TensorFlow, and PyTorch."
            .to_string(),
        email: "alex.johnson@example.com".to_string(),
        github: "github.com/alexjohnson".to_string(),
        linkedin: "linkedin.com/in/alexjohnson".to_string(),
        education: vec![
            Education {
                degree: "M.S. Computer Science, AI Specialization".to_string(),
                institution: "Stanford University".to_string(),
                year: "2018".to_string(),
            },
            Education {
                degree: "B.S. Mathematics and Computer Science".to_string(),
                institution: "University of Washington".to_string(),
                year: "2016".to_string(),
            },
        ],
    }
}

fn builtin_skills() -> SkillCategories {
    SKILLS
        .iter()
        .map(|(category, skills)| (category.to_string(), strings(skills)))
        .collect()
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Real-time Object Detection System".to_string(),
            description: "Developed a real-time object detection system using YOLOv5 that \
                          processes video streams with 30+ FPS on edge devices. Implemented model \
                          quantization to reduce model size by 70% while maintaining 95% of accuracy."
                .to_string(),
            technologies: strings(&["PyTorch", "YOLO", "OpenCV", "TensorRT"]),
            image: "https://images.unsplash.com/photo-1567361808960-dec9cb578182?w=500&h=300&fit=crop"
                .to_string(),
            repository: "https://github.com/alexjohnson/realtime-object-detection".to_string(),
        },
        Project {
            title: "NLP-Powered Customer Support Chatbot".to_string(),
            description: "Built an intelligent customer support chatbot using BERT for intent \
                          classification and named entity recognition. Reduced customer support \
                          response time by 45% and achieved 87% customer satisfaction rate."
                .to_string(),
            technologies: strings(&["TensorFlow", "BERT", "FastAPI", "Redis"]),
            image: "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=500&h=300&fit=crop"
                .to_string(),
            repository: "https://github.com/alexjohnson/nlp-support-chatbot".to_string(),
        },
        Project {
            title: "Recommendation Engine for E-commerce".to_string(),
            description: "Designed and implemented a hybrid recommendation system combining \
                          collaborative filtering and content-based approaches. Increased \
                          conversion rate by 23% and average order value by 17%."
                .to_string(),
            technologies: strings(&["Python", "Spark MLlib", "AWS SageMaker", "PostgreSQL"]),
            image: "https://images.unsplash.com/photo-1661956602868-6ae368943878?w=500&h=300&fit=crop"
                .to_string(),
            repository: "https://github.com/alexjohnson/ecommerce-recommender".to_string(),
        },
        Project {
            title: "Predictive Maintenance for Industrial Equipment".to_string(),
            description: "Created an end-to-end ML pipeline for predictive maintenance using \
                          sensor data. Reduced unplanned downtime by 35% and maintenance costs by \
                          25% for a manufacturing client."
                .to_string(),
            technologies: strings(&["Scikit-learn", "Time Series Analysis", "Kafka", "Grafana"]),
            image: "https://images.unsplash.com/photo-1581092921461-7d65ca45393a?w=500&h=300&fit=crop"
                .to_string(),
            repository: "https://github.com/alexjohnson/predictive-maintenance".to_string(),
        },
    ]
}

fn builtin_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            role: "Senior ML Engineer".to_string(),
            company: "TechCorp AI".to_string(),
            period: "2020 - Present".to_string(),
            description: "Lead a team of 5 ML engineers developing computer vision solutions for \
                          retail analytics. Architected and deployed ML pipelines processing \
                          10TB+ of video data daily."
                .to_string(),
            achievements: strings(&[
                "Improved model accuracy by 15% using novel data augmentation techniques",
                "Reduced inference time by 40% through model optimization and quantization",
                "Implemented CI/CD pipeline for ML models, reducing deployment time from days to hours",
            ]),
        },
        ExperienceEntry {
            role: "ML Engineer".to_string(),
            company: "DataSense Inc.".to_string(),
            period: "2018 - 2020".to_string(),
            description: "Developed NLP models for sentiment analysis and text classification for \
                          social media monitoring platform."
                .to_string(),
            achievements: strings(&[
                "Built multilingual sentiment analysis model supporting 12 languages",
                "Implemented real-time processing pipeline handling 50K+ messages per minute",
                "Reduced false positive rate by 30% using advanced entity recognition techniques",
            ]),
        },
        ExperienceEntry {
            role: "Data Science Intern".to_string(),
            company: "AI Research Lab".to_string(),
            period: "2017 - 2018".to_string(),
            description: "Researched and implemented deep learning models for medical image analysis."
                .to_string(),
            achievements: strings(&[
                "Co-authored research paper on tumor detection using convolutional neural networks",
                "Developed data preprocessing pipeline for medical imaging datasets",
                "Created interactive visualization tool for model interpretability",
            ]),
        },
    ]
}
