use air_roll_trainer::AirRollTrainer;

air_roll_host::export_plugin!(AirRollTrainer, "air-roll-trainer");
