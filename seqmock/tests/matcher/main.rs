mod range;
mod string;
