//! Beispielinhalte für den ersten Start.

use super::content::{
    slugify, BlogPost, BlogSection, Founder, Project, Review, Subscriber, TeamMember,
};
use super::outline;

fn blog(
    id: u64,
    title: &str,
    category: &str,
    published_on: &str,
    excerpt: &str,
    sections: &[(u8, &str, &str)],
) -> BlogPost {
    let mut sections: Vec<BlogSection> = sections
        .iter()
        .map(|&(level, heading, body)| BlogSection::new(level, heading, body))
        .collect();
    outline::renumber(&mut sections);
    BlogPost {
        id,
        title: title.into(),
        slug: slugify(title),
        excerpt: excerpt.into(),
        author: "Studio Editorial".into(),
        category: category.into(),
        published_on: published_on.into(),
        cover_image: format!("/images/blog/{}.jpg", slugify(title)),
        sections,
    }
}

/// Beispiel-Blogposts.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        blog(
            1,
            "Designing With Daylight",
            "Architecture",
            "2024-02-12",
            "How orientation and apertures shape calm interiors.",
            &[
                (1, "Why light comes first", "Daylight sets the rhythm of a space."),
                (2, "Orientation", "North light for studios, east light for kitchens."),
                (2, "Apertures", "Deep reveals soften glare."),
                (1, "Materials that respond", "Lime plaster and oak carry warmth."),
                (3, "A note on glazing", "Low-iron glass keeps colours true."),
            ],
        ),
        blog(
            2,
            "The Quiet Kitchen",
            "Interiors",
            "2024-03-04",
            "Storage strategies that keep surfaces clear.",
            &[
                (1, "Planning the work triangle", "Short paths, fewer steps."),
                (2, "Hidden storage", "Full-height pantries swallow clutter."),
                (1, "Finishes", "Matte fronts age gracefully."),
            ],
        ),
        blog(
            3,
            "Restoring a 1930s Townhouse",
            "Renovation",
            "2024-04-18",
            "Keeping character while adding modern comfort.",
            &[
                (1, "Survey", "Every cornice was documented before work began."),
                (1, "Structure", "New steel hides behind original plaster."),
                (2, "Insulation", "Breathable wood fibre boards."),
            ],
        ),
        blog(
            4,
            "Small Spaces, Big Ideas",
            "Interiors",
            "2024-05-09",
            "Multi-use furniture and sightlines.",
            &[(1, "Sightlines", "Long views make rooms feel larger.")],
        ),
        blog(
            5,
            "Material Library: Terrazzo",
            "Materials",
            "2024-06-21",
            "A durable floor with endless variation.",
            &[
                (1, "Composition", "Marble chips bound in cement or resin."),
                (2, "Maintenance", "Seal yearly in busy areas."),
            ],
        ),
        blog(
            6,
            "Landscape as Architecture",
            "Landscape",
            "2024-08-02",
            "Gardens that extend the floor plan outdoors.",
            &[(1, "Thresholds", "Level transitions blur inside and out.")],
        ),
        blog(
            7,
            "Our Process, Step by Step",
            "Studio",
            "2024-09-15",
            "From first sketch to handover.",
            &[
                (1, "Discovery", "Listening before drawing."),
                (1, "Concept", "Three options, one direction."),
                (1, "Delivery", "Weekly site visits until handover."),
            ],
        ),
    ]
}

fn project(
    id: u64,
    title: &str,
    category: &str,
    location: &str,
    year: u16,
    summary: &str,
    comparison: bool,
) -> Project {
    let slug = slugify(title);
    Project {
        id,
        title: title.into(),
        slug: slug.clone(),
        category: category.into(),
        location: location.into(),
        year,
        summary: summary.into(),
        cover_image: format!("/images/projects/{slug}/cover.jpg"),
        before_image: comparison.then(|| format!("/images/projects/{slug}/before.jpg")),
        after_image: comparison.then(|| format!("/images/projects/{slug}/after.jpg")),
    }
}

/// Beispiel-Portfolioprojekte.
pub fn projects() -> Vec<Project> {
    vec![
        project(1, "Casa Lumen", "Residential", "Lisbon", 2023, "A courtyard house organised around a single olive tree.", true),
        project(2, "Harbour Offices", "Commercial", "Hamburg", 2022, "Flexible workspace in a converted warehouse.", false),
        project(3, "Atelier Nord", "Interiors", "Copenhagen", 2024, "A ceramicist's studio with north light.", true),
        project(4, "Stone Barn", "Renovation", "Cotswolds", 2021, "Agricultural barn turned family home.", true),
        project(5, "Pavilion 8", "Cultural", "Rotterdam", 2023, "Temporary timber pavilion for a summer festival.", false),
        project(6, "Garden Flat", "Residential", "London", 2022, "Lower-ground flat opened to the garden.", true),
        project(7, "Café Grain", "Hospitality", "Vienna", 2024, "Bakery café with terrazzo counters.", false),
        project(8, "Hillside Retreat", "Residential", "Ticino", 2020, "Concrete retreat stepping down the slope.", false),
    ]
}

/// Beispiel-Teammitglieder.
pub fn team_members() -> Vec<TeamMember> {
    [
        (1, "Mara Lind", "Project Architect", "Leads residential work."),
        (2, "Jonas Ek", "Interior Designer", "Obsessed with joinery details."),
        (3, "Priya Rao", "Landscape Architect", "Designs gardens that age well."),
        (4, "Tomás Vidal", "Visualisation", "Turns sketches into images."),
    ]
    .into_iter()
    .map(|(id, name, role, bio)| TeamMember {
        id,
        name: name.into(),
        role: role.into(),
        bio: bio.into(),
        photo: format!("/images/team/{}.jpg", slugify(name)),
    })
    .collect()
}

/// Beispiel-Gründer.
pub fn founders() -> Vec<Founder> {
    vec![
        Founder {
            id: 1,
            name: "Elena Brandt".into(),
            title: "Founding Partner".into(),
            quote: "Good buildings are generous to the people inside them.".into(),
            photo: "/images/founders/elena-brandt.jpg".into(),
        },
        Founder {
            id: 2,
            name: "Samuel Okafor".into(),
            title: "Founding Partner".into(),
            quote: "Every project starts with a long conversation.".into(),
            photo: "/images/founders/samuel-okafor.jpg".into(),
        },
    ]
}

/// Beispiel-Reviews (speisen die Bogen-Sektion).
pub fn reviews() -> Vec<Review> {
    [
        (1, "Clara M.", "Homeowner, Lisbon", 5, "They listened first and drew second. Our house feels like us."),
        (2, "David K.", "Harbour Group", 5, "On time, on budget and the team loves the new office."),
        (3, "Ines F.", "Atelier Nord", 4, "The north light in my studio is exactly what I hoped for."),
        (4, "Ravi P.", "Homeowner, London", 5, "Our dark basement is now the brightest room in the house."),
        (5, "Lena S.", "Café Grain", 5, "Guests keep asking who designed the space."),
    ]
    .into_iter()
    .map(|(id, author, company, rating, text)| Review {
        id,
        author: author.into(),
        company: company.into(),
        rating,
        text: text.into(),
    })
    .collect()
}

/// Beispiel-Abonnenten.
pub fn subscribers() -> Vec<Subscriber> {
    [
        (1, "hello@claramoreira.pt", 1_704_067_200),
        (2, "d.keller@harbourgroup.de", 1_706_745_600),
        (3, "ines@ateliernord.dk", 1_709_251_200),
    ]
    .into_iter()
    .map(|(id, email, subscribed_at)| Subscriber {
        id,
        email: email.into(),
        subscribed_at,
    })
    .collect()
}
