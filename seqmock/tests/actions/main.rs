mod capture;
mod side_effect;
