// Keyword gap analysis — which job description terms the resume never uses.

pub mod gap;
