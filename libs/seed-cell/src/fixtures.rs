//! Literal sample data written by the seed routines.

pub struct DoctorFixture {
    pub name: &'static str,
    pub specialty: &'static str,
    pub image: &'static str,
    pub experience: i32,
}

pub struct ServiceFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// `author` indexes into the doctors as listed oldest first.
pub struct PostFixture {
    pub title: &'static str,
    pub slug: &'static str,
    pub content: &'static str,
    pub summary: &'static str,
    pub author: usize,
    pub category: &'static str,
    pub image: &'static str,
}

/// `post` indexes into [`POSTS`].
pub struct CommentFixture {
    pub post: usize,
    pub name: &'static str,
    pub email: &'static str,
    pub content: &'static str,
}

pub const DOCTORS: [DoctorFixture; 4] = [
    DoctorFixture {
        name: "Dr. Sarah Johnson",
        specialty: "Cardiology",
        image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        experience: 12,
    },
    DoctorFixture {
        name: "Dr. Michael Chen",
        specialty: "Neurology",
        image: "https://images.unsplash.com/photo-1537368910025-700350fe46c7?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        experience: 15,
    },
    DoctorFixture {
        name: "Dr. Emily Williams",
        specialty: "General Medicine",
        image: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        experience: 8,
    },
    DoctorFixture {
        name: "Dr. James Wilson",
        specialty: "Ophthalmology",
        image: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        experience: 10,
    },
];

pub const SERVICES: [ServiceFixture; 6] = [
    ServiceFixture {
        name: "General Medicine",
        description: "Comprehensive healthcare for all ages",
        icon: "Stethoscope",
    },
    ServiceFixture {
        name: "Cardiology",
        description: "Expert heart care and treatment",
        icon: "Heart",
    },
    ServiceFixture {
        name: "Neurology",
        description: "Advanced brain and nervous system care",
        icon: "Brain",
    },
    ServiceFixture {
        name: "Ophthalmology",
        description: "Complete eye care services",
        icon: "Eye",
    },
    ServiceFixture {
        name: "Dental Care",
        description: "Professional dental services",
        icon: "Tooth",
    },
    ServiceFixture {
        name: "Emergency Care",
        description: "24/7 emergency medical services",
        icon: "FirstAid",
    },
];

pub const POSTS: [PostFixture; 4] = [
    PostFixture {
        title: "Understanding Heart Health: A Comprehensive Guide",
        slug: "understanding-heart-health",
        content: "<p>Heart disease remains one of the leading causes of death globally. In this comprehensive guide, we'll explore the factors that contribute to heart health and preventive measures you can take...</p>",
        summary: "A detailed look at maintaining cardiovascular health and preventing heart disease.",
        author: 0,
        category: "Health Tips",
        image: "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80",
    },
    PostFixture {
        title: "Latest Advances in Neurology Research",
        slug: "latest-advances-neurology-research",
        content: "<p>The field of neurology continues to evolve with groundbreaking discoveries. Recent studies have shown promising results in treating neurological disorders...</p>",
        summary: "Exploring recent breakthroughs in neurological research and treatment methods.",
        author: 1,
        category: "Medical Research",
        image: "https://images.unsplash.com/photo-1559757175-7b31bfb2c5cb?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80",
    },
    PostFixture {
        title: "The Importance of Regular Eye Check-ups",
        slug: "importance-regular-eye-checkups",
        content: "<p>Regular eye examinations are crucial for maintaining good vision and detecting early signs of eye diseases. Learn about the recommended frequency of check-ups and common eye conditions...</p>",
        summary: "Why you shouldn't skip your regular eye examinations and what to expect during a check-up.",
        author: 2,
        category: "Patient Care",
        image: "https://images.unsplash.com/photo-1589394815804-964ed0be2eb5?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80",
    },
    PostFixture {
        title: "AI in Healthcare: Transforming Patient Care",
        slug: "ai-healthcare-transforming-patient-care",
        content: "<p>Artificial Intelligence is revolutionizing healthcare delivery. From diagnosis to treatment planning, AI is helping healthcare providers make more accurate decisions...</p>",
        summary: "How artificial intelligence is improving healthcare delivery and patient outcomes.",
        author: 3,
        category: "Technology",
        image: "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80",
    },
];

pub const COMMENTS: [CommentFixture; 2] = [
    CommentFixture {
        post: 0,
        name: "John Smith",
        email: "john@example.com",
        content: "Very informative article! I learned a lot about heart health.",
    },
    CommentFixture {
        post: 1,
        name: "Sarah Johnson",
        email: "sarah@example.com",
        content: "The research findings are fascinating. Looking forward to seeing how this develops.",
    },
];
