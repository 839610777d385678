pub(crate) mod curve;
pub(crate) mod looping;
pub(crate) mod melody;
pub(crate) mod movement;
pub(crate) mod score;
