pub mod entities;
mod normalize;

pub use entities::{
    About, CvContent, CvPatch, CvRecord, Education, PersonalDetails, Project, WorkExperience,
};
